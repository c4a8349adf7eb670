// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{Config, PbeSettings};
use crate::consts::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULTS_VERSION, DEFAULT_CIPHER, DEFAULT_HASH,
    DEFAULT_ITERATIONS,
};

pub fn default_pbe() -> PbeSettings {
    PbeSettings {
        cipher: DEFAULT_CIPHER,
        hash: DEFAULT_HASH,
        iterations: DEFAULT_ITERATIONS,
    }
}

pub fn default_config() -> Config {
    Config {
        defaults_version: Some(DEFAULTS_VERSION),
        pbe: default_pbe(),
    }
}

/// `<platform config dir>/pbe-crypt/config.toml`, if the platform has one
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
