// src/crypto/random.rs
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{CoreError, Result};

/// Salt and IV bytes come straight from the operating system
pub(super) fn fill(buf: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buf).map_err(CoreError::primitive)
}
