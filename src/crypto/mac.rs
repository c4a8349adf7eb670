// src/crypto/mac.rs
use hmac::digest::core_api::BlockSizeUser;
use hmac::digest::{Digest, KeyInit};
use hmac::{Mac, SimpleHmac};

use super::Prf;
use crate::enums::HashId;
use crate::error::{CoreError, Result};

/// HMAC state keyed once; every evaluation starts from a clone of it
struct HmacPrf<D: Digest + BlockSizeUser> {
    keyed: SimpleHmac<D>,
}

impl<D> Prf for HmacPrf<D>
where
    D: Digest + BlockSizeUser + Clone + Send,
{
    fn output_len(&self) -> usize {
        <D as Digest>::output_size()
    }

    fn compute(&self, message: &[u8]) -> Result<Vec<u8>> {
        let mut mac = self.keyed.clone();
        Mac::update(&mut mac, message);
        Ok(Mac::finalize(mac).into_bytes().to_vec())
    }
}

fn keyed<D>(key: &[u8]) -> Result<Box<dyn Prf>>
where
    D: Digest + BlockSizeUser + Clone + Send + 'static,
{
    let keyed = <SimpleHmac<D> as KeyInit>::new_from_slice(key).map_err(CoreError::primitive)?;
    Ok(Box::new(HmacPrf { keyed }))
}

pub(super) const HASHES: [HashId; 6] = [
    HashId::Md5,
    HashId::Sha1,
    HashId::Sha224,
    HashId::Sha256,
    HashId::Sha384,
    HashId::Sha512,
];

pub(super) fn hmac(hash: HashId, key: &[u8]) -> Result<Box<dyn Prf>> {
    match hash {
        HashId::Md5 => keyed::<md5::Md5>(key),
        HashId::Sha1 => keyed::<sha1::Sha1>(key),
        HashId::Sha224 => keyed::<sha2::Sha224>(key),
        HashId::Sha256 => keyed::<sha2::Sha256>(key),
        HashId::Sha384 => keyed::<sha2::Sha384>(key),
        HashId::Sha512 => keyed::<sha2::Sha512>(key),
        HashId::Md4 | HashId::Ripemd160 => Err(CoreError::primitive(format!(
            "no HMAC implementation for {hash}"
        ))),
    }
}
