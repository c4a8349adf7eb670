// src/core/artifact.rs
//! Wire framing: base64(`salt[16] || iv[iv_len] || ciphertext`)
//!
//! The frame carries no algorithm identifier and no version tag. Cipher,
//! hash and iteration count travel out-of-band and must match on both
//! sides; a mismatch decrypts to garbage rather than failing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::catalog::CipherSpec;
use crate::consts::SALT_LEN;
use crate::core::util::strip_ascii_whitespace;
use crate::error::{DecodeError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedArtifact {
    pub salt: [u8; SALT_LEN],
    pub iv: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

impl EncryptedArtifact {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(SALT_LEN + self.iv.len() + self.ciphertext.len());
        raw.extend_from_slice(&self.salt);
        raw.extend_from_slice(&self.iv);
        raw.extend_from_slice(&self.ciphertext);
        raw
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Split raw artifact bytes using the cipher's IV length and block size
    pub fn from_bytes(raw: &[u8], spec: &CipherSpec) -> Result<Self> {
        let min = SALT_LEN + spec.iv_len;
        if raw.len() < min {
            return Err(DecodeError::Truncated {
                len: raw.len(),
                min,
            }
            .into());
        }

        let (salt, rest) = raw.split_at(SALT_LEN);
        let (iv, ciphertext) = rest.split_at(spec.iv_len);
        if ciphertext.is_empty() || ciphertext.len() % spec.block_size != 0 {
            return Err(DecodeError::Misaligned {
                len: ciphertext.len(),
                block_size: spec.block_size,
            }
            .into());
        }

        let mut salt_arr = [0u8; SALT_LEN];
        salt_arr.copy_from_slice(salt);
        Ok(Self {
            salt: salt_arr,
            iv: iv.to_vec(),
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Decode standard base64, ignoring embedded line breaks and spaces
    pub fn from_base64(encoded: &str, spec: &CipherSpec) -> Result<Self> {
        let raw = STANDARD.decode(strip_ascii_whitespace(encoded))?;
        Self::from_bytes(&raw, spec)
    }
}
