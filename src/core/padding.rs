// src/core/padding.rs
//! Length-prefixed block padding (PKCS#7 layout)
//!
//! Padding is always added: a cleartext that already fills whole blocks gets
//! one extra block of `b` bytes of value `b`.
//!
//! Unpadding trusts the last byte and does not check the other padding
//! bytes. With a wrong key this silently returns a wrongly truncated buffer
//! instead of failing; the artifact format has nothing better to offer.

use crate::error::{CoreError, Result};

/// Append `N = b - (len % b)` bytes of value `N`
pub fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let b = checked_block(block_size)?;
    let n = b - (data.len() % block_size) as u8;
    let mut out = Vec::with_capacity(data.len() + n as usize);
    out.extend_from_slice(data);
    out.resize(data.len() + n as usize, n);
    Ok(out)
}

/// Drop as many trailing bytes as the last byte says
pub fn unpad(mut data: Vec<u8>) -> Vec<u8> {
    let n = data.last().copied().unwrap_or(0) as usize;
    data.truncate(data.len().saturating_sub(n));
    data
}

/// Length `pad` would produce for a cleartext of `len` bytes
pub fn padded_len(len: usize, block_size: usize) -> Result<usize> {
    checked_block(block_size)?;
    Ok(len + block_size - (len % block_size))
}

// The pad count has to fit in one byte
fn checked_block(block_size: usize) -> Result<u8> {
    u8::try_from(block_size)
        .ok()
        .filter(|b| *b > 0)
        .ok_or_else(|| CoreError::config(format!("block size {block_size} is outside 1..=255")))
}
