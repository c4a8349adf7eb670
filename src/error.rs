// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Unknown or unsupported algorithm, bad iteration count or key length
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Artifact decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// Reported by the primitive backend and passed through unchanged
    #[error("Crypto primitive failed: {0}")]
    Primitive(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Value serialization failed: {0}")]
    Serialization(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Why an encrypted artifact could not be taken apart
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("artifact is {len} bytes, need at least {min} (salt + iv)")]
    Truncated { len: usize, min: usize },

    #[error("ciphertext is {len} bytes, not a positive multiple of {block_size}")]
    Misaligned { len: usize, block_size: usize },
}

impl CoreError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        CoreError::Configuration(msg.into())
    }

    /// Keeps the backend's own error as the source; plain messages box as-is
    pub(crate) fn primitive(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        CoreError::Primitive(err.into())
    }
}

impl From<base64::DecodeError> for CoreError {
    fn from(err: base64::DecodeError) -> Self {
        CoreError::Decode(DecodeError::InvalidBase64(err))
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
