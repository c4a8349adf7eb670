// src/core/kdf.rs
//! PBKDF2 (RFC 8018 §5.2) over a backend-supplied HMAC
//!
//! ```text
//! T_i = U_1 ^ U_2 ^ ... ^ U_c
//! U_1 = PRF(P, S || INT_BE32(i))
//! U_j = PRF(P, U_{j-1})
//! DK  = (T_1 || T_2 || ... )[..dkLen]
//! ```
//!
//! Deterministic by construction: decrypt re-derives the same key from the
//! salt stored in the artifact.

use crate::aliases::KeyMaterial;
use crate::catalog::{self, CipherSpec};
use crate::core::key::DerivedKey;
use crate::core::util::xor_in_place;
use crate::crypto::{CryptoBackend, Prf};
use crate::enums::HashId;
use crate::error::{CoreError, Result};

/// Raw PBKDF2 with an already-keyed PRF whose output is `h_len` bytes
pub fn pbkdf2(
    prf: &dyn Prf,
    h_len: usize,
    salt: &[u8],
    iterations: u32,
    dk_len: usize,
) -> Result<KeyMaterial> {
    if iterations < 1 {
        return Err(CoreError::config("iteration count must be at least 1"));
    }
    if dk_len == 0 {
        return Err(CoreError::config("derived key length must be positive"));
    }
    if h_len == 0 || prf.output_len() != h_len {
        return Err(CoreError::primitive(format!(
            "PRF produces {} bytes, catalog says {h_len}",
            prf.output_len()
        )));
    }

    let num_blocks = dk_len.div_ceil(h_len);
    let num_blocks = u32::try_from(num_blocks).map_err(|_| {
        CoreError::config(format!("derived key length {dk_len} is too long for PBKDF2"))
    })?;

    let mut derived = Vec::with_capacity(num_blocks as usize * h_len);
    let mut seed = Vec::with_capacity(salt.len() + 4);

    for i in 1..=num_blocks {
        seed.clear();
        seed.extend_from_slice(salt);
        seed.extend_from_slice(&i.to_be_bytes());

        let mut u = prf.compute(&seed)?;
        let mut t = u.clone();
        for _ in 1..iterations {
            u = prf.compute(&u)?;
            xor_in_place(&mut t, &u);
        }
        derived.extend_from_slice(&t);
    }

    // Last block contributes only dk_len - h_len * (num_blocks - 1) bytes
    derived.truncate(dk_len);
    Ok(KeyMaterial::new(derived))
}

/// PBKDF2-HMAC-`hash` of `passphrase`, `dk_len` bytes long
pub fn derive_key<B: CryptoBackend + ?Sized>(
    backend: &B,
    hash: HashId,
    passphrase: &[u8],
    salt: &[u8],
    iterations: u32,
    dk_len: usize,
) -> Result<KeyMaterial> {
    let h_len = catalog::hash_len(hash)?;
    if iterations < 1 {
        return Err(CoreError::config("iteration count must be at least 1"));
    }
    let prf = backend.hmac(hash, passphrase)?;
    pbkdf2(prf.as_ref(), h_len, salt, iterations, dk_len)
}

/// Derive `key_len(cipher)` bytes and shape them for the cipher
pub fn derive_cipher_key<B: CryptoBackend + ?Sized>(
    backend: &B,
    spec: &CipherSpec,
    hash: HashId,
    passphrase: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<DerivedKey> {
    let raw = derive_key(backend, hash, passphrase, salt, iterations, spec.key_len)?;
    DerivedKey::for_cipher(spec, raw)
}
