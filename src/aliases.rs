// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret containers used throughout pbe-crypt.
//! Everything here zeroizes on drop.

pub use secure_gate::dynamic_alias;

// Raw PBKDF2 output and the sub-keys split from it
dynamic_alias!(KeyMaterial, Vec<u8>);

// Cleartext after unpadding, before it is handed back to a codec
dynamic_alias!(ClearText, Vec<u8>);
