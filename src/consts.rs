// src/consts.rs
//! Shared constants: wire format parameters and defaults

use crate::enums::{CipherId, HashId};

/// Salt length of every artifact, independent of the cipher
pub const SALT_LEN: usize = 16;

/// Version of the default (cipher, hash, iterations) triple below.
///
/// Bump it whenever any of the three changes; config files that pin
/// `defaults_version` are rejected on mismatch.
pub const DEFAULTS_VERSION: u32 = 1;

pub const DEFAULT_CIPHER: CipherId = CipherId::AesCbc256;

pub const DEFAULT_HASH: HashId = HashId::Sha512;

// Legacy value; existing artifacts were produced with it
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Environment variable pointing at a TOML config file
pub const ENV_CONFIG_PATH: &str = "PBE_CONFIG";

pub const ENV_CIPHER: &str = "PBE_CIPHER";
pub const ENV_HASH: &str = "PBE_HASH";
pub const ENV_ITERATIONS: &str = "PBE_ITERATIONS";

/// Sub-directory of the platform config dir searched when `PBE_CONFIG` is unset
pub const CONFIG_DIR_NAME: &str = "pbe-crypt";
pub const CONFIG_FILE_NAME: &str = "config.toml";
