// src/core/key.rs
//! Per-call key material, never persisted, zeroized on drop

use std::fmt;

use crate::aliases::KeyMaterial;
use crate::catalog::CipherSpec;
use crate::error::{CoreError, Result};

/// PBKDF2 output shaped for the target cipher
///
/// Triple-DES ciphers take their key as three independent sub-keys; every
/// other cipher takes one contiguous key. Callers must handle both shapes.
pub enum DerivedKey {
    Single(KeyMaterial),
    TripleSplit(KeyMaterial, KeyMaterial, KeyMaterial),
}

impl DerivedKey {
    /// Split `raw` into three equal contiguous parts if the cipher asks for it
    pub fn for_cipher(spec: &CipherSpec, raw: KeyMaterial) -> Result<Self> {
        let bytes = raw.expose_secret();
        if bytes.len() != spec.key_len {
            return Err(CoreError::config(format!(
                "{} needs a {}-byte key, got {}",
                spec.id,
                spec.key_len,
                bytes.len()
            )));
        }
        if !spec.multi_key_split {
            return Ok(DerivedKey::Single(raw));
        }
        if bytes.len() % 3 != 0 {
            return Err(CoreError::config(format!(
                "{}-byte key cannot be split into three sub-keys",
                bytes.len()
            )));
        }
        let third = bytes.len() / 3;
        let part = |n: usize| KeyMaterial::new(bytes[n * third..(n + 1) * third].to_vec());
        Ok(DerivedKey::TripleSplit(part(0), part(1), part(2)))
    }

    /// Total key length in bytes
    pub fn len(&self) -> usize {
        match self {
            DerivedKey::Single(k) => k.expose_secret().len(),
            DerivedKey::TripleSplit(a, b, c) => {
                a.expose_secret().len() + b.expose_secret().len() + c.expose_secret().len()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Single contiguous key, re-joining sub-keys in order (k1 || k2 || k3)
    pub fn to_contiguous(&self) -> KeyMaterial {
        match self {
            DerivedKey::Single(k) => KeyMaterial::new(k.expose_secret().clone()),
            DerivedKey::TripleSplit(a, b, c) => {
                let mut joined = Vec::with_capacity(self.len());
                joined.extend_from_slice(a.expose_secret());
                joined.extend_from_slice(b.expose_secret());
                joined.extend_from_slice(c.expose_secret());
                KeyMaterial::new(joined)
            }
        }
    }
}

// Never print key bytes
impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivedKey::Single(_) => write!(f, "DerivedKey::Single({} bytes)", self.len()),
            DerivedKey::TripleSplit(..) => {
                write!(f, "DerivedKey::TripleSplit({} bytes)", self.len())
            }
        }
    }
}
