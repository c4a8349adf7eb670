// src/crypto/mod.rs
//! Primitive backend. The only place that touches cipher, MAC and RNG crates
//!
//! Everything above this module talks to [`CryptoBackend`]. The default
//! [`RustCryptoBackend`] wires the RustCrypto block ciphers, modes and
//! digests; tests and embedders can supply their own.

mod backend;
mod decrypt;
mod encrypt;
mod mac;
mod random;

use std::collections::BTreeSet;

use crate::core::key::DerivedKey;
use crate::enums::{CipherId, HashId};
use crate::error::Result;

pub use backend::RustCryptoBackend;

/// A keyed pseudorandom function, i.e. HMAC with the passphrase as key
pub trait Prf: Send {
    fn output_len(&self) -> usize;

    fn compute(&self, message: &[u8]) -> Result<Vec<u8>>;
}

/// The external primitive library, seen from the pipeline
pub trait CryptoBackend: Send + Sync {
    /// Cipher identifiers this backend can run, before any denylist
    fn reported_ciphers(&self) -> BTreeSet<CipherId>;

    /// Hash identifiers this backend can key an HMAC with, before any denylist
    fn reported_hashes(&self) -> BTreeSet<HashId>;

    /// HMAC keyed once with `key`
    fn hmac(&self, hash: HashId, key: &[u8]) -> Result<Box<dyn Prf>>;

    /// Raw mode transform over block-aligned `data`; no padding is applied
    fn block_encrypt(
        &self,
        cipher: CipherId,
        key: &DerivedKey,
        iv: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>>;

    fn block_decrypt(
        &self,
        cipher: CipherId,
        key: &DerivedKey,
        iv: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>>;

    /// Fill `buf` from a cryptographically secure source
    fn fill_random(&self, buf: &mut [u8]) -> Result<()>;
}

impl<B: CryptoBackend + ?Sized> CryptoBackend for &B {
    fn reported_ciphers(&self) -> BTreeSet<CipherId> {
        (**self).reported_ciphers()
    }

    fn reported_hashes(&self) -> BTreeSet<HashId> {
        (**self).reported_hashes()
    }

    fn hmac(&self, hash: HashId, key: &[u8]) -> Result<Box<dyn Prf>> {
        (**self).hmac(hash, key)
    }

    fn block_encrypt(
        &self,
        cipher: CipherId,
        key: &DerivedKey,
        iv: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>> {
        (**self).block_encrypt(cipher, key, iv, data)
    }

    fn block_decrypt(
        &self,
        cipher: CipherId,
        key: &DerivedKey,
        iv: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>> {
        (**self).block_decrypt(cipher, key, iv, data)
    }

    fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_random(buf)
    }
}
