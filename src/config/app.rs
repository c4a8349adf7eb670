// src/config/app.rs
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::catalog;
use crate::consts::{DEFAULTS_VERSION, ENV_CIPHER, ENV_CONFIG_PATH, ENV_HASH, ENV_ITERATIONS};
use crate::core::pipeline::PbeParams;
use crate::enums::{CipherId, HashId};
use crate::error::{CoreError, Result};

#[cfg(feature = "logging")]
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Pins the default triple this file was written against
    #[serde(default)]
    pub defaults_version: Option<u32>,
    #[serde(default)]
    pub pbe: PbeSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PbeSettings {
    pub cipher: CipherId,
    pub hash: HashId,
    pub iterations: u32,
}

impl Default for PbeSettings {
    fn default() -> Self {
        default_pbe()
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config = toml::from_str(content)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn params(&self) -> PbeParams {
        PbeParams::new(self.pbe.cipher, self.pbe.hash, self.pbe.iterations)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(version) = self.defaults_version {
            if version != DEFAULTS_VERSION {
                return Err(CoreError::config(format!(
                    "config pins defaults_version {version}, this build ships {DEFAULTS_VERSION}"
                )));
            }
        }
        if self.pbe.iterations < 1 {
            return Err(CoreError::config("pbe.iterations must be at least 1"));
        }
        catalog::cipher_spec(self.pbe.cipher)?;
        if catalog::is_denied_hash(self.pbe.hash) {
            return Err(CoreError::config(format!(
                "hash {} is not supported",
                self.pbe.hash
            )));
        }
        Ok(())
    }

    /// `PBE_CIPHER`, `PBE_HASH` and `PBE_ITERATIONS` win over the file
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(cipher) = lookup(ENV_CIPHER) {
            self.pbe.cipher = cipher.parse()?;
        }
        if let Some(hash) = lookup(ENV_HASH) {
            self.pbe.hash = hash.parse()?;
        }
        if let Some(iterations) = lookup(ENV_ITERATIONS) {
            self.pbe.iterations = iterations.trim().parse().map_err(|_| {
                CoreError::config(format!("{ENV_ITERATIONS} is not a number: {iterations:?}"))
            })?;
        }
        self.validate()
    }
}

/// Build a config from an optional file plus overrides.
///
/// A given `path` must exist; `None` means built-in defaults.
pub fn resolve<F>(path: Option<&Path>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut conf = match path {
        Some(path) => {
            #[cfg(feature = "logging")]
            info!("Loading PBE config from {}", path.display());
            Config::from_file(path)?
        }
        None => default_config(),
    };
    conf.apply_overrides(lookup)?;
    Ok(conf)
}

/// Config file location: `$PBE_CONFIG`, else the platform default if present
pub fn config_path() -> Option<PathBuf> {
    match std::env::var_os(ENV_CONFIG_PATH) {
        Some(path) => Some(PathBuf::from(path)),
        None => default_config_path().filter(|p| p.exists()),
    }
}

/// Resolve from the process environment
pub fn try_load() -> Result<Config> {
    resolve(config_path().as_deref(), |key| std::env::var(key).ok())
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Global config. Loaded once, falls back to defaults if anything is wrong
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| match try_load() {
        Ok(conf) => conf,
        Err(_err) => {
            #[cfg(feature = "logging")]
            warn!("Invalid PBE config ({_err}), using built-in defaults");
            default_config()
        }
    })
}
