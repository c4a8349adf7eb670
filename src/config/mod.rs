// src/config/mod.rs
//! Configuration system for pbe-crypt
//!
//! Lazily loaded (cipher, hash, iterations) defaults: TOML file + env overrides.
//! The pipeline itself never reads it; callers turn it into [`crate::PbeParams`].

pub use app::{config_path, load, resolve, try_load, Config, PbeSettings};
pub use defaults::{default_config, default_config_path};

mod app;
mod defaults;
