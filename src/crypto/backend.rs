// src/crypto/backend.rs
use std::collections::BTreeSet;

use super::{decrypt, encrypt, mac, random, CryptoBackend, Prf};
use crate::core::key::DerivedKey;
use crate::enums::{CipherId, HashId};
use crate::error::Result;

/// Pure-Rust primitives from the RustCrypto project
///
/// Reports every catalogued cipher it can run. It has no MD4 or RIPEMD-160
/// HMAC, and none of the denylisted modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoBackend;

const CIPHERS: [CipherId; 15] = [
    CipherId::DesCbc,
    CipherId::DesCfb,
    CipherId::DesEde3Cbc,
    CipherId::DesEde3Cfb,
    CipherId::DesEde3,
    CipherId::BlowfishCbc,
    CipherId::BlowfishCfb64,
    CipherId::BlowfishOfb64,
    CipherId::Rc2Cbc,
    CipherId::AesCbc,
    CipherId::AesCbc128,
    CipherId::AesCfb8,
    CipherId::AesCfb128,
    CipherId::AesCbc256,
    CipherId::AesIge256,
];

impl CryptoBackend for RustCryptoBackend {
    fn reported_ciphers(&self) -> BTreeSet<CipherId> {
        CIPHERS.into_iter().collect()
    }

    fn reported_hashes(&self) -> BTreeSet<HashId> {
        mac::HASHES.into_iter().collect()
    }

    fn hmac(&self, hash: HashId, key: &[u8]) -> Result<Box<dyn Prf>> {
        mac::hmac(hash, key)
    }

    fn block_encrypt(
        &self,
        cipher: CipherId,
        key: &DerivedKey,
        iv: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>> {
        encrypt::encrypt(cipher, key, iv, data)
    }

    fn block_decrypt(
        &self,
        cipher: CipherId,
        key: &DerivedKey,
        iv: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>> {
        decrypt::decrypt(cipher, key, iv, data)
    }

    fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        random::fill(buf)
    }
}
