// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Every cipher and hash identifier the crate knows about, including the
//! ones that are never offered to callers (see [`crate::catalog`]). Keeping
//! them in closed enums gives exhaustive `match` over the metadata tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Block cipher + mode identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CipherId {
    DesCbc,
    DesCfb,
    DesEde3Cbc,
    DesEde3Cfb,
    /// Three-key triple DES in ECB mode (no IV)
    DesEde3,
    BlowfishCbc,
    BlowfishCfb64,
    BlowfishOfb64,
    Rc2Cbc,
    /// Legacy unqualified name for AES-256 in CBC mode
    AesCbc,
    AesCbc128,
    AesCfb8,
    AesCfb128,
    AesCbc256,
    AesIge256,

    // Known but always denylisted
    AesEcb,
    DesEcb,
    BlowfishEcb,
    AesCtr,
    Rc4,
    AesGcm,
}

impl CipherId {
    pub const ALL: [CipherId; 21] = [
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
        CipherId::AesEcb,
        CipherId::DesEcb,
        CipherId::BlowfishEcb,
        CipherId::AesCtr,
        CipherId::Rc4,
        CipherId::AesGcm,
    ];

    /// Canonical lowercase name, as used in config files and env vars
    pub const fn name(self) -> &'static str {
        match self {
            CipherId::DesCbc => "des-cbc",
            CipherId::DesCfb => "des-cfb",
            CipherId::DesEde3Cbc => "des-ede3-cbc",
            CipherId::DesEde3Cfb => "des-ede3-cfb",
            CipherId::DesEde3 => "des-ede3",
            CipherId::BlowfishCbc => "blowfish-cbc",
            CipherId::BlowfishCfb64 => "blowfish-cfb64",
            CipherId::BlowfishOfb64 => "blowfish-ofb64",
            CipherId::Rc2Cbc => "rc2-cbc",
            CipherId::AesCbc => "aes-cbc",
            CipherId::AesCbc128 => "aes-cbc128",
            CipherId::AesCfb8 => "aes-cfb8",
            CipherId::AesCfb128 => "aes-cfb128",
            CipherId::AesCbc256 => "aes-cbc256",
            CipherId::AesIge256 => "aes-ige256",
            CipherId::AesEcb => "aes-ecb",
            CipherId::DesEcb => "des-ecb",
            CipherId::BlowfishEcb => "blowfish-ecb",
            CipherId::AesCtr => "aes-ctr",
            CipherId::Rc4 => "rc4",
            CipherId::AesGcm => "aes-gcm",
        }
    }
}

/// Digest identifiers selecting the HMAC variant used by PBKDF2
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HashId {
    Md4,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Ripemd160,
}

impl HashId {
    pub const ALL: [HashId; 8] = [
        HashId::Md4,
        HashId::Md5,
        HashId::Sha1,
        HashId::Sha224,
        HashId::Sha256,
        HashId::Sha384,
        HashId::Sha512,
        HashId::Ripemd160,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HashId::Md4 => "md4",
            HashId::Md5 => "md5",
            HashId::Sha1 => "sha1",
            HashId::Sha224 => "sha224",
            HashId::Sha256 => "sha256",
            HashId::Sha384 => "sha384",
            HashId::Sha512 => "sha512",
            HashId::Ripemd160 => "ripemd160",
        }
    }
}

impl fmt::Display for CipherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for HashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names compare case-insensitively and ignore `_` vs `-`
fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}

impl FromStr for CipherId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        CipherId::ALL
            .into_iter()
            .find(|id| id.name() == wanted)
            .ok_or_else(|| CoreError::config(format!("unknown cipher identifier: {s:?}")))
    }
}

impl FromStr for HashId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        // "sha-512" style spellings are common in older configs
        let wanted = match wanted.as_str() {
            "sha-1" | "sha-224" | "sha-256" | "sha-384" | "sha-512" => wanted.replace('-', ""),
            "ripemd-160" => "ripemd160".to_owned(),
            _ => wanted,
        };
        HashId::ALL
            .into_iter()
            .find(|id| id.name() == wanted)
            .ok_or_else(|| CoreError::config(format!("unknown hash identifier: {s:?}")))
    }
}

impl TryFrom<String> for CipherId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for HashId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CipherId> for String {
    fn from(id: CipherId) -> Self {
        id.name().to_owned()
    }
}

impl From<HashId> for String {
    fn from(id: HashId) -> Self {
        id.name().to_owned()
    }
}
