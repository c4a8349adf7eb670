// src/core/value.rs
//! Structured-value wrappers over the byte-level pipeline
//!
//! The codec only has to round-trip a value through bytes; the pipeline has
//! no opinion on the format.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::aliases::ClearText;
use crate::core::pipeline::{PbeParams, Pipeline};
use crate::crypto::{CryptoBackend, RustCryptoBackend};
use crate::enums::{CipherId, HashId};
use crate::error::{CoreError, Result};

/// Converts structured values to and from an opaque byte sequence
pub trait ValueCodec {
    fn to_bytes<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>>;

    fn from_bytes<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T>;
}

/// Compact JSON via serde_json
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl ValueCodec for JsonCodec {
    fn to_bytes<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| CoreError::Serialization(Box::new(e)))
    }

    fn from_bytes<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|e| CoreError::Serialization(Box::new(e)))
    }
}

impl<B: CryptoBackend> Pipeline<B> {
    pub fn encrypt_value<T, C>(
        &self,
        params: &PbeParams,
        passphrase: &[u8],
        value: &T,
        codec: &C,
    ) -> Result<String>
    where
        T: Serialize + ?Sized,
        C: ValueCodec,
    {
        let bytes = ClearText::new(codec.to_bytes(value)?);
        self.encrypt(params, passphrase, bytes.expose_secret())
    }

    /// Decrypt and decode. A wrong passphrase most often shows up here as a
    /// codec error, but that is incidental, not an integrity check.
    pub fn decrypt_value<T, C>(
        &self,
        params: &PbeParams,
        passphrase: &[u8],
        artifact: &str,
        codec: &C,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        C: ValueCodec,
    {
        let bytes = ClearText::new(self.decrypt(params, passphrase, artifact)?);
        codec.from_bytes(bytes.expose_secret())
    }
}

/// [`Pipeline::encrypt_value`] with the default backend and JSON
pub fn encrypt_value<T: Serialize + ?Sized>(
    cipher: CipherId,
    hash: HashId,
    iterations: u32,
    passphrase: &[u8],
    value: &T,
) -> Result<String> {
    Pipeline::<RustCryptoBackend>::default().encrypt_value(
        &PbeParams::new(cipher, hash, iterations),
        passphrase,
        value,
        &JsonCodec,
    )
}

/// [`Pipeline::decrypt_value`] with the default backend and JSON
pub fn decrypt_value<T: DeserializeOwned>(
    cipher: CipherId,
    hash: HashId,
    iterations: u32,
    passphrase: &[u8],
    artifact: &str,
) -> Result<T> {
    Pipeline::<RustCryptoBackend>::default().decrypt_value(
        &PbeParams::new(cipher, hash, iterations),
        passphrase,
        artifact,
        &JsonCodec,
    )
}
