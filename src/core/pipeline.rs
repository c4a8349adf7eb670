// src/core/pipeline.rs
//! Encrypt / decrypt orchestration
//!
//! Encrypt: random salt + IV → PBKDF2 key → pad → cipher → base64 frame.
//! Decrypt runs the same steps backwards from the stored salt and IV.
//!
//! # No integrity check
//!
//! The artifact format has no MAC or AEAD tag. Decrypting with the wrong
//! passphrase, cipher, hash or iteration count usually *succeeds* and
//! returns garbage, or a garbage-truncated buffer. Callers that need to
//! detect tampering or a wrong passphrase must add their own check on top;
//! this format cannot be extended to carry one without breaking every
//! existing artifact.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, CipherSpec};
use crate::consts::{DEFAULT_CIPHER, DEFAULT_HASH, DEFAULT_ITERATIONS, SALT_LEN};
use crate::core::artifact::EncryptedArtifact;
use crate::core::kdf::derive_cipher_key;
use crate::core::padding::{pad, unpad};
use crate::crypto::{CryptoBackend, RustCryptoBackend};
use crate::enums::{CipherId, HashId};
use crate::error::{CoreError, Result};

#[cfg(feature = "logging")]
use tracing::debug;

/// The out-of-band parameters both sides must agree on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PbeParams {
    pub cipher: CipherId,
    pub hash: HashId,
    pub iterations: u32,
}

impl PbeParams {
    pub fn new(cipher: CipherId, hash: HashId, iterations: u32) -> Self {
        Self {
            cipher,
            hash,
            iterations,
        }
    }
}

impl Default for PbeParams {
    fn default() -> Self {
        Self::new(DEFAULT_CIPHER, DEFAULT_HASH, DEFAULT_ITERATIONS)
    }
}

/// Stateless encrypt/decrypt service over a primitive backend
#[derive(Debug, Clone, Default)]
pub struct Pipeline<B = RustCryptoBackend> {
    backend: B,
}

impl<B: CryptoBackend> Pipeline<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn supported_ciphers(&self) -> BTreeSet<CipherId> {
        catalog::supported_ciphers(&self.backend)
    }

    pub fn supported_hashes(&self) -> BTreeSet<HashId> {
        catalog::supported_hashes(&self.backend)
    }

    /// Encrypt `cleartext` into a base64 artifact
    pub fn encrypt(
        &self,
        params: &PbeParams,
        passphrase: &[u8],
        cleartext: &[u8],
    ) -> Result<String> {
        self.encrypt_artifact(params, passphrase, cleartext)
            .map(|artifact| artifact.to_base64())
    }

    /// Same as [`Pipeline::encrypt`] without the base64 step
    pub fn encrypt_artifact(
        &self,
        params: &PbeParams,
        passphrase: &[u8],
        cleartext: &[u8],
    ) -> Result<EncryptedArtifact> {
        let spec = self.validate(params)?;

        let mut salt = [0u8; SALT_LEN];
        self.backend.fill_random(&mut salt)?;
        let mut iv = vec![0u8; spec.iv_len];
        self.backend.fill_random(&mut iv)?;

        let key = derive_cipher_key(
            &self.backend,
            &spec,
            params.hash,
            passphrase,
            &salt,
            params.iterations,
        )?;
        let padded = pad(cleartext, spec.block_size)?;
        let ciphertext = self
            .backend
            .block_encrypt(params.cipher, &key, &iv, &padded)?;

        if ciphertext.len() != padded.len() {
            return Err(CoreError::primitive(format!(
                "{} returned {} bytes for {} bytes of input",
                params.cipher,
                ciphertext.len(),
                padded.len()
            )));
        }

        #[cfg(feature = "logging")]
        debug!(
            cipher = %params.cipher,
            hash = %params.hash,
            iterations = params.iterations,
            cleartext_len = cleartext.len(),
            ciphertext_len = ciphertext.len(),
            "encrypted artifact"
        );

        Ok(EncryptedArtifact {
            salt,
            iv,
            ciphertext,
        })
    }

    /// Decrypt a base64 artifact back to cleartext.
    ///
    /// A wrong passphrase or mismatched parameters do **not** reliably
    /// produce an error; see the module docs.
    pub fn decrypt(
        &self,
        params: &PbeParams,
        passphrase: &[u8],
        artifact: &str,
    ) -> Result<Vec<u8>> {
        let spec = self.validate(params)?;
        let artifact = EncryptedArtifact::from_base64(artifact, &spec)?;
        self.decrypt_validated(&spec, params, passphrase, &artifact)
    }

    pub fn decrypt_artifact(
        &self,
        params: &PbeParams,
        passphrase: &[u8],
        artifact: &EncryptedArtifact,
    ) -> Result<Vec<u8>> {
        let spec = self.validate(params)?;
        // Re-frame so hand-built artifacts get the same shape checks
        let artifact = EncryptedArtifact::from_bytes(&artifact.to_bytes(), &spec)?;
        self.decrypt_validated(&spec, params, passphrase, &artifact)
    }

    fn decrypt_validated(
        &self,
        spec: &CipherSpec,
        params: &PbeParams,
        passphrase: &[u8],
        artifact: &EncryptedArtifact,
    ) -> Result<Vec<u8>> {
        let key = derive_cipher_key(
            &self.backend,
            spec,
            params.hash,
            passphrase,
            &artifact.salt,
            params.iterations,
        )?;
        let padded = self.backend.block_decrypt(
            params.cipher,
            &key,
            &artifact.iv,
            &artifact.ciphertext,
        )?;

        #[cfg(feature = "logging")]
        debug!(
            cipher = %params.cipher,
            hash = %params.hash,
            iterations = params.iterations,
            ciphertext_len = artifact.ciphertext.len(),
            "decrypted artifact"
        );

        Ok(unpad(padded))
    }

    /// Catalogue, denylist and iteration checks shared by both directions
    fn validate(&self, params: &PbeParams) -> Result<CipherSpec> {
        let spec = catalog::ensure_supported_cipher(&self.backend, params.cipher)?;
        catalog::ensure_supported_hash(&self.backend, params.hash)?;
        if params.iterations < 1 {
            return Err(CoreError::config("iteration count must be at least 1"));
        }
        Ok(spec)
    }
}

pub fn supported_ciphers() -> BTreeSet<CipherId> {
    Pipeline::<RustCryptoBackend>::default().supported_ciphers()
}

pub fn supported_hashes() -> BTreeSet<HashId> {
    Pipeline::<RustCryptoBackend>::default().supported_hashes()
}

pub fn default_cipher() -> CipherId {
    DEFAULT_CIPHER
}

pub fn default_hash() -> HashId {
    DEFAULT_HASH
}

pub fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

/// Encrypt with the default backend; see [`Pipeline::encrypt`]
pub fn encrypt(
    cipher: CipherId,
    hash: HashId,
    iterations: u32,
    passphrase: &[u8],
    cleartext: &[u8],
) -> Result<String> {
    Pipeline::<RustCryptoBackend>::default().encrypt(
        &PbeParams::new(cipher, hash, iterations),
        passphrase,
        cleartext,
    )
}

/// Decrypt with the default backend; see [`Pipeline::decrypt`]
pub fn decrypt(
    cipher: CipherId,
    hash: HashId,
    iterations: u32,
    passphrase: &[u8],
    artifact: &str,
) -> Result<Vec<u8>> {
    Pipeline::<RustCryptoBackend>::default().decrypt(
        &PbeParams::new(cipher, hash, iterations),
        passphrase,
        artifact,
    )
}
