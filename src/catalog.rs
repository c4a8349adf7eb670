// src/catalog.rs
//! Static cipher / hash metadata and the supported-algorithm filter
//!
//! The tables are fixed at build time. What a caller may actually use is
//! whatever the primitive backend reports, minus the denylists below.
//!
//! # AES block size
//!
//! The legacy artifact format pads the AES-256 family (`aes-cbc`,
//! `aes-cbc256`, `aes-ige256`) to 32-byte units even though AES itself has
//! a 16-byte block. That width is kept as [`CipherSpec::block_size`] so
//! artifacts stay byte-compatible in both directions; the real cipher block
//! is exposed separately as [`CipherSpec::native_block_size`]. Since 32 is a
//! multiple of 16 the cipher modes never see a partial block.

use std::collections::BTreeSet;

use crate::crypto::CryptoBackend;
use crate::enums::{CipherId, HashId};
use crate::error::{CoreError, Result};

/// Per-cipher metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherSpec {
    pub id: CipherId,
    pub iv_len: usize,
    pub key_len: usize,
    /// Padding and framing unit of the artifact format
    pub block_size: usize,
    /// Block size of the underlying cipher primitive
    pub native_block_size: usize,
    /// Derived key is split into three equal sub-keys (triple DES)
    pub multi_key_split: bool,
}

/// Per-hash metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashSpec {
    pub id: HashId,
    /// HMAC output length in bytes
    pub output_len: usize,
}

const fn spec(
    id: CipherId,
    iv_len: usize,
    key_len: usize,
    block_size: usize,
    native_block_size: usize,
    multi_key_split: bool,
) -> CipherSpec {
    CipherSpec {
        id,
        iv_len,
        key_len,
        block_size,
        native_block_size,
        multi_key_split,
    }
}

/// Stream-like, unauthenticated-only or tag-bearing modes the format has no slot for
pub fn is_denied_cipher(id: CipherId) -> bool {
    matches!(
        id,
        CipherId::AesCtr
            | CipherId::AesEcb
            | CipherId::DesEcb
            | CipherId::BlowfishEcb
            | CipherId::Rc4
            | CipherId::AesGcm
    )
}

/// Weak or unsupported digests
pub fn is_denied_hash(id: HashId) -> bool {
    matches!(id, HashId::Md4 | HashId::Ripemd160)
}

/// Metadata for a cipher; denylisted ciphers have none
pub fn cipher_spec(id: CipherId) -> Result<CipherSpec> {
    use CipherId::*;

    let found = match id {
        DesCbc => spec(id, 8, 8, 8, 8, false),
        DesCfb => spec(id, 8, 8, 8, 8, false),
        DesEde3Cbc => spec(id, 8, 24, 8, 8, true),
        DesEde3Cfb => spec(id, 8, 24, 8, 8, true),
        DesEde3 => spec(id, 0, 24, 8, 8, true),
        BlowfishCbc => spec(id, 8, 16, 8, 8, false),
        BlowfishCfb64 => spec(id, 8, 16, 8, 8, false),
        BlowfishOfb64 => spec(id, 8, 16, 8, 8, false),
        Rc2Cbc => spec(id, 8, 16, 8, 8, false),
        AesCbc => spec(id, 16, 32, 32, 16, false),
        AesCbc128 => spec(id, 16, 16, 16, 16, false),
        AesCfb8 => spec(id, 16, 16, 16, 16, false),
        AesCfb128 => spec(id, 16, 16, 16, 16, false),
        AesCbc256 => spec(id, 16, 32, 32, 16, false),
        // IGE chains on two previous blocks, hence a double-width IV
        AesIge256 => spec(id, 32, 32, 32, 16, false),
        AesEcb | DesEcb | BlowfishEcb | AesCtr | Rc4 | AesGcm => {
            return Err(CoreError::config(format!(
                "cipher {id} is not supported by the artifact format"
            )))
        }
    };
    Ok(found)
}

pub fn hash_spec(id: HashId) -> Result<HashSpec> {
    let output_len = match id {
        HashId::Md4 | HashId::Md5 => 16,
        HashId::Sha1 | HashId::Ripemd160 => 20,
        HashId::Sha224 => 28,
        HashId::Sha256 => 32,
        HashId::Sha384 => 48,
        HashId::Sha512 => 64,
    };
    Ok(HashSpec { id, output_len })
}

pub fn iv_len(id: CipherId) -> Result<usize> {
    cipher_spec(id).map(|s| s.iv_len)
}

pub fn key_len(id: CipherId) -> Result<usize> {
    cipher_spec(id).map(|s| s.key_len)
}

pub fn block_size(id: CipherId) -> Result<usize> {
    cipher_spec(id).map(|s| s.block_size)
}

pub fn is_multi_key_split(id: CipherId) -> Result<bool> {
    cipher_spec(id).map(|s| s.multi_key_split)
}

pub fn hash_len(id: HashId) -> Result<usize> {
    hash_spec(id).map(|s| s.output_len)
}

/// Backend-reported ciphers minus the denylist
pub fn supported_ciphers<B: CryptoBackend + ?Sized>(backend: &B) -> BTreeSet<CipherId> {
    backend
        .reported_ciphers()
        .into_iter()
        .filter(|id| !is_denied_cipher(*id))
        .collect()
}

/// Backend-reported hashes minus the denylist
pub fn supported_hashes<B: CryptoBackend + ?Sized>(backend: &B) -> BTreeSet<HashId> {
    backend
        .reported_hashes()
        .into_iter()
        .filter(|id| !is_denied_hash(*id))
        .collect()
}

/// Fails unless `cipher` is catalogued and offered by `backend`
pub fn ensure_supported_cipher<B: CryptoBackend + ?Sized>(
    backend: &B,
    cipher: CipherId,
) -> Result<CipherSpec> {
    let spec = cipher_spec(cipher)?;
    if !supported_ciphers(backend).contains(&cipher) {
        return Err(CoreError::config(format!(
            "cipher {cipher} is not available from the crypto backend"
        )));
    }
    Ok(spec)
}

/// Fails unless `hash` is catalogued, not denylisted, and offered by `backend`
pub fn ensure_supported_hash<B: CryptoBackend + ?Sized>(
    backend: &B,
    hash: HashId,
) -> Result<HashSpec> {
    if is_denied_hash(hash) {
        return Err(CoreError::config(format!("hash {hash} is not supported")));
    }
    let spec = hash_spec(hash)?;
    if !supported_hashes(backend).contains(&hash) {
        return Err(CoreError::config(format!(
            "hash {hash} is not available from the crypto backend"
        )));
    }
    Ok(spec)
}
