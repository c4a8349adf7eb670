//! Byte helpers shared by key derivation and artifact decoding

/// `acc ^= other`, over the shorter of the two
pub fn xor_in_place(acc: &mut [u8], other: &[u8]) {
    for (a, b) in acc.iter_mut().zip(other) {
        *a ^= b;
    }
}

/// Drop ASCII whitespace (line-wrapped base64 in config files)
pub fn strip_ascii_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}
