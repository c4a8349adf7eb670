// tests/support.rs
//! Test backends: wrap the real primitives, change what they report or how
//! they draw randomness

use std::collections::BTreeSet;
use std::io;
use std::sync::atomic::{AtomicU8, Ordering};

use pbe_crypt::{
    CipherId, CoreError, CryptoBackend, DerivedKey, HashId, Prf, Result, RustCryptoBackend,
};

/// Reports every identifier the crate knows, like a full OpenSSL build would
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct ReportsEverything(pub RustCryptoBackend);

/// Deterministic "randomness": 0, 1, 2, ... across calls
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct CountingRng {
    inner: RustCryptoBackend,
    next: AtomicU8,
}

/// RNG that always fails
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct BrokenRng(pub RustCryptoBackend);

macro_rules! delegate_primitives {
    ($field:tt) => {
        fn hmac(&self, hash: HashId, key: &[u8]) -> Result<Box<dyn Prf>> {
            self.$field.hmac(hash, key)
        }

        fn block_encrypt(
            &self,
            cipher: CipherId,
            key: &DerivedKey,
            iv: &[u8],
            data: &[u8],
        ) -> Result<Vec<u8>> {
            self.$field.block_encrypt(cipher, key, iv, data)
        }

        fn block_decrypt(
            &self,
            cipher: CipherId,
            key: &DerivedKey,
            iv: &[u8],
            data: &[u8],
        ) -> Result<Vec<u8>> {
            self.$field.block_decrypt(cipher, key, iv, data)
        }
    };
}

impl CryptoBackend for ReportsEverything {
    fn reported_ciphers(&self) -> BTreeSet<CipherId> {
        CipherId::ALL.into_iter().collect()
    }

    fn reported_hashes(&self) -> BTreeSet<HashId> {
        HashId::ALL.into_iter().collect()
    }

    fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        self.0.fill_random(buf)
    }

    delegate_primitives!(0);
}

impl CryptoBackend for CountingRng {
    fn reported_ciphers(&self) -> BTreeSet<CipherId> {
        self.inner.reported_ciphers()
    }

    fn reported_hashes(&self) -> BTreeSet<HashId> {
        self.inner.reported_hashes()
    }

    fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        for byte in buf.iter_mut() {
            *byte = self.next.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    delegate_primitives!(inner);
}

impl CryptoBackend for BrokenRng {
    fn reported_ciphers(&self) -> BTreeSet<CipherId> {
        self.0.reported_ciphers()
    }

    fn reported_hashes(&self) -> BTreeSet<HashId> {
        self.0.reported_hashes()
    }

    fn fill_random(&self, _buf: &mut [u8]) -> Result<()> {
        Err(CoreError::Primitive(Box::new(io::Error::other(
            "entropy source unavailable",
        ))))
    }

    delegate_primitives!(0);
}
