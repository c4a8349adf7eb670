// tests/config_tests.rs
use std::collections::HashMap;
use std::fs;

use tempfile::tempdir;

use pbe_crypt::config::{default_config, resolve, Config};
use pbe_crypt::consts::{ENV_CIPHER, ENV_HASH, ENV_ITERATIONS};
use pbe_crypt::{CipherId, CoreError, HashId, PbeParams};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_defaults_match_the_constant_triple() {
    let conf = default_config();
    assert_eq!(conf.params(), PbeParams::default());
    assert_eq!(conf.defaults_version, Some(1));
    assert_eq!(Config::default(), conf);
}

#[test]
fn test_full_toml_file() {
    let conf = Config::from_toml_str(
        r#"
        defaults_version = 1

        [pbe]
        cipher = "des-ede3-cbc"
        hash = "sha256"
        iterations = 20000
        "#,
    )
    .unwrap();
    assert_eq!(
        conf.params(),
        PbeParams::new(CipherId::DesEde3Cbc, HashId::Sha256, 20000)
    );
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let conf = Config::from_toml_str("[pbe]\nhash = \"sha1\"\n").unwrap();
    assert_eq!(conf.pbe.cipher, CipherId::AesCbc256);
    assert_eq!(conf.pbe.hash, HashId::Sha1);
    assert_eq!(conf.pbe.iterations, 1000);
    assert_eq!(conf.defaults_version, None);

    let empty = Config::from_toml_str("").unwrap();
    assert_eq!(empty.params(), PbeParams::default());
}

#[test]
fn test_rejects_bad_values() {
    let cases = [
        "[pbe]\ncipher = \"aes-gcm\"\n",
        "[pbe]\nhash = \"md4\"\n",
        "[pbe]\niterations = 0\n",
        "defaults_version = 2\n",
    ];
    for case in cases {
        assert!(
            matches!(Config::from_toml_str(case), Err(CoreError::Configuration(_))),
            "{case}"
        );
    }
}

#[test]
fn test_unknown_identifier_or_bad_syntax_is_toml_error() {
    assert!(matches!(
        Config::from_toml_str("[pbe]\ncipher = \"twofish\"\n"),
        Err(CoreError::Toml(_))
    ));
    assert!(matches!(
        Config::from_toml_str("[pbe\n"),
        Err(CoreError::Toml(_))
    ));
}

#[test]
fn test_resolve_reads_file_then_applies_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[pbe]\ncipher = \"blowfish-cbc\"\nhash = \"sha384\"\n").unwrap();

    let from_file = resolve(Some(&path), no_env).unwrap();
    assert_eq!(from_file.pbe.cipher, CipherId::BlowfishCbc);
    assert_eq!(from_file.pbe.hash, HashId::Sha384);

    let env: HashMap<&str, &str> = [(ENV_HASH, "SHA-224"), (ENV_ITERATIONS, " 42 ")].into();
    let overridden = resolve(Some(&path), |k| env.get(k).map(|v| v.to_string())).unwrap();
    assert_eq!(
        overridden.params(),
        PbeParams::new(CipherId::BlowfishCbc, HashId::Sha224, 42)
    );
}

#[test]
fn test_resolve_without_file_uses_defaults() {
    let conf = resolve(None, no_env).unwrap();
    assert_eq!(conf, default_config());

    let conf = resolve(None, |k| (k == ENV_CIPHER).then(|| "aes-cfb128".to_string())).unwrap();
    assert_eq!(conf.pbe.cipher, CipherId::AesCfb128);
}

#[test]
fn test_resolve_rejects_bad_overrides() {
    assert!(matches!(
        resolve(None, |k| (k == ENV_ITERATIONS).then(|| "many".to_string())),
        Err(CoreError::Configuration(_))
    ));
    assert!(matches!(
        resolve(None, |k| (k == ENV_CIPHER).then(|| "rc4".to_string())),
        Err(CoreError::Configuration(_))
    ));
}

#[test]
fn test_explicit_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(resolve(Some(&missing), no_env), Err(CoreError::Io(_))));
}

#[test]
fn test_config_drives_the_pipeline() {
    let conf = Config::from_toml_str("[pbe]\ncipher = \"aes-ige256\"\niterations = 3\n").unwrap();
    let params = conf.params();
    let artifact = pbe_crypt::encrypt(params.cipher, params.hash, params.iterations, b"pw", b"cfg")
        .unwrap();
    let clear =
        pbe_crypt::decrypt(params.cipher, params.hash, params.iterations, b"pw", &artifact).unwrap();
    assert_eq!(clear, b"cfg");
}
