// src/lib.rs
//! pbe-crypt: password-based encryption with a legacy artifact format
//!
//! Features:
//! - PBKDF2-HMAC key derivation (MD5, SHA-1, SHA-2 family)
//! - DES / triple-DES / Blowfish / RC2 / AES in CBC, CFB, OFB, ECB and IGE modes
//! - base64(`salt || iv || ciphertext`) artifacts
//! - Zeroize-on-drop key material via secure-gate
//!
//! **The artifacts are not authenticated.** A wrong passphrase or mismatched
//! parameters decrypt to garbage instead of failing; see [`crate::core::pipeline`].

pub mod aliases;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod core;
pub mod crypto;
pub mod enums;

pub mod error;

// Re-export everything users need at the crate root
pub use catalog::{cipher_spec, hash_spec, CipherSpec, HashSpec};
pub use config::load as load_config;
pub use crate::core::{
    decrypt, decrypt_value, default_cipher, default_hash, default_iterations, encrypt,
    encrypt_value, supported_ciphers, supported_hashes, DerivedKey, EncryptedArtifact,
    JsonCodec, PbeParams, Pipeline, ValueCodec,
};
pub use crypto::{CryptoBackend, Prf, RustCryptoBackend};
pub use enums::{CipherId, HashId};
pub use error::{CoreError, DecodeError, Result};
