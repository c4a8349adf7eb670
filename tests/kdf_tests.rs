// tests/kdf_tests.rs
use pbe_crypt::catalog::cipher_spec;
use pbe_crypt::core::kdf::{derive_cipher_key, derive_key};
use pbe_crypt::{CipherId, CoreError, DerivedKey, HashId, RustCryptoBackend};

mod common;

fn pbkdf2_hex(hash: HashId, password: &[u8], salt: &[u8], iterations: u32, dk_len: usize) -> String {
    let key = derive_key(&RustCryptoBackend, hash, password, salt, iterations, dk_len).unwrap();
    hex::encode(key.expose_secret())
}

#[test]
fn test_rfc6070_sha1_one_iteration() {
    common::setup();
    assert_eq!(
        pbkdf2_hex(HashId::Sha1, b"password", b"salt", 1, 20),
        "0c60c80f961f0e71f3a9b524af6012062fe037a6"
    );
}

#[test]
fn test_rfc6070_sha1_two_iterations() {
    assert_eq!(
        pbkdf2_hex(HashId::Sha1, b"password", b"salt", 2, 20),
        "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957"
    );
}

#[test]
fn test_rfc6070_sha1_4096_iterations() {
    assert_eq!(
        pbkdf2_hex(HashId::Sha1, b"password", b"salt", 4096, 20),
        "4b007901b765489abead49d926f721d065a429c1"
    );
}

#[test]
fn test_rfc6070_multi_block_truncated_output() {
    // 25 bytes = one full SHA-1 block + 5 bytes of the second
    assert_eq!(
        pbkdf2_hex(
            HashId::Sha1,
            b"passwordPASSWORDpassword",
            b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
            4096,
            25
        ),
        "3d2eec4fe41c849b80c8d83662c0e44a8b291a964cf2f07038"
    );
}

#[test]
fn test_rfc7914_sha256_two_blocks() {
    assert_eq!(
        pbkdf2_hex(HashId::Sha256, b"passwd", b"salt", 1, 64),
        "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
         49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783"
    );
}

#[test]
fn test_derivation_is_deterministic() {
    for hash in [HashId::Md5, HashId::Sha1, HashId::Sha224, HashId::Sha384, HashId::Sha512] {
        let a = pbkdf2_hex(hash, b"correct horse", b"battery staple", 7, 40);
        let b = pbkdf2_hex(hash, b"correct horse", b"battery staple", 7, 40);
        assert_eq!(a, b, "{hash}");
        assert_eq!(a.len(), 80);
    }
}

fn bit_distance(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

#[test]
fn test_one_bit_change_avalanches() {
    let mut flipped_pass = 0;
    let mut flipped_salt = 0;
    let mut total_bits = 0;

    for trial in 0u8..16 {
        let pass = [b'p', b'w', trial, 0x55];
        let salt = [trial; 16];
        let mut pass2 = pass;
        pass2[3] ^= 0x01;
        let mut salt2 = salt;
        salt2[15] ^= 0x80;

        let base = derive_key(&RustCryptoBackend, HashId::Sha512, &pass, &salt, 3, 64).unwrap();
        let by_pass =
            derive_key(&RustCryptoBackend, HashId::Sha512, &pass2, &salt, 3, 64).unwrap();
        let by_salt =
            derive_key(&RustCryptoBackend, HashId::Sha512, &pass, &salt2, 3, 64).unwrap();

        flipped_pass += bit_distance(base.expose_secret(), by_pass.expose_secret());
        flipped_salt += bit_distance(base.expose_secret(), by_salt.expose_secret());
        total_bits += 64 * 8;
    }

    // Expect about half the bits to flip; 16 * 512 bits keeps the spread tight
    for flipped in [flipped_pass, flipped_salt] {
        let ratio = flipped as f64 / total_bits as f64;
        assert!((0.45..0.55).contains(&ratio), "ratio {ratio}");
    }
}

#[test]
fn test_zero_iterations_is_configuration_error() {
    let err = derive_key(&RustCryptoBackend, HashId::Sha256, b"pw", b"salt", 0, 32).unwrap_err();
    assert!(matches!(err, CoreError::Configuration(_)));
}

#[test]
fn test_zero_length_is_configuration_error() {
    let err = derive_key(&RustCryptoBackend, HashId::Sha256, b"pw", b"salt", 1, 0).unwrap_err();
    assert!(matches!(err, CoreError::Configuration(_)));
}

#[test]
fn test_triple_des_key_is_split_into_three_parts() {
    let spec = cipher_spec(CipherId::DesEde3Cbc).unwrap();
    let key = derive_cipher_key(&RustCryptoBackend, &spec, HashId::Sha256, b"pw", b"salt", 10)
        .unwrap();
    let raw = derive_key(&RustCryptoBackend, HashId::Sha256, b"pw", b"salt", 10, 24).unwrap();

    match &key {
        DerivedKey::TripleSplit(a, b, c) => {
            assert_eq!(a.expose_secret().as_slice(), &raw.expose_secret()[..8]);
            assert_eq!(b.expose_secret().as_slice(), &raw.expose_secret()[8..16]);
            assert_eq!(c.expose_secret().as_slice(), &raw.expose_secret()[16..]);
        }
        DerivedKey::Single(_) => panic!("triple DES must get a split key"),
    }
    assert_eq!(key.len(), 24);
    assert_eq!(key.to_contiguous().expose_secret(), raw.expose_secret());
}

#[test]
fn test_single_key_ciphers_get_one_contiguous_key() {
    let spec = cipher_spec(CipherId::AesCbc256).unwrap();
    let key = derive_cipher_key(&RustCryptoBackend, &spec, HashId::Sha512, b"pw", b"salt", 1)
        .unwrap();
    assert!(matches!(key, DerivedKey::Single(_)));
    assert_eq!(key.len(), 32);
    assert_eq!(format!("{key:?}"), "DerivedKey::Single(32 bytes)");
}
