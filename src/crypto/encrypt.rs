// src/crypto/encrypt.rs
use aes::{Aes128, Aes256};
use blowfish::Blowfish;
use cipher::block_padding::NoPadding;
use cipher::{BlockEncryptMut, InnerIvInit, KeyInit, StreamCipher};
use des::{Des, TdesEde3};
use rc2::Rc2;

use crate::aliases::KeyMaterial;
use crate::core::key::DerivedKey;
use crate::enums::CipherId;
use crate::error::{CoreError, Result};

/// Raw mode encryption of block-aligned `data` (padding is the caller's job)
pub(super) fn encrypt(
    cipher: CipherId,
    key: &DerivedKey,
    iv: &[u8],
    data: &[u8],
) -> Result<Vec<u8>> {
    let material = key_material(cipher, key)?;
    let k = material.expose_secret().as_slice();

    match cipher {
        CipherId::DesCbc => run::<cbc::Encryptor<Des>>(inner(k)?, iv, data),
        CipherId::DesCfb => run::<cfb_mode::Encryptor<Des>>(inner(k)?, iv, data),
        CipherId::DesEde3Cbc => run::<cbc::Encryptor<TdesEde3>>(inner(k)?, iv, data),
        CipherId::DesEde3Cfb => run::<cfb_mode::Encryptor<TdesEde3>>(inner(k)?, iv, data),
        CipherId::DesEde3 => {
            no_iv(cipher, iv)?;
            aligned(data.len(), 8)?;
            let mode = ecb::Encryptor::<TdesEde3>::new_from_slice(k)
                .map_err(CoreError::primitive)?;
            Ok(mode.encrypt_padded_vec_mut::<NoPadding>(data))
        }
        CipherId::BlowfishCbc => run::<cbc::Encryptor<Blowfish>>(inner(k)?, iv, data),
        CipherId::BlowfishCfb64 => run::<cfb_mode::Encryptor<Blowfish>>(inner(k)?, iv, data),
        CipherId::BlowfishOfb64 => ofb_keystream(k, iv, data),
        CipherId::Rc2Cbc => run::<cbc::Encryptor<Rc2>>(rc2(k)?, iv, data),
        CipherId::AesCbc | CipherId::AesCbc256 => {
            run::<cbc::Encryptor<Aes256>>(inner(k)?, iv, data)
        }
        CipherId::AesCbc128 => run::<cbc::Encryptor<Aes128>>(inner(k)?, iv, data),
        CipherId::AesCfb8 => run::<cfb8::Encryptor<Aes128>>(inner(k)?, iv, data),
        CipherId::AesCfb128 => run::<cfb_mode::Encryptor<Aes128>>(inner(k)?, iv, data),
        CipherId::AesIge256 => run::<ige::Encryptor<Aes256>>(inner(k)?, iv, data),
        CipherId::AesEcb
        | CipherId::DesEcb
        | CipherId::BlowfishEcb
        | CipherId::AesCtr
        | CipherId::Rc4
        | CipherId::AesGcm => Err(unavailable(cipher)),
    }
}

fn run<M>(inner: M::Inner, iv: &[u8], data: &[u8]) -> Result<Vec<u8>>
where
    M: InnerIvInit + BlockEncryptMut,
{
    aligned(data.len(), M::block_size())?;
    let mode = M::inner_iv_slice_init(inner, iv).map_err(CoreError::primitive)?;
    Ok(mode.encrypt_padded_vec_mut::<NoPadding>(data))
}

/// Flatten the derived key into what the cipher crate takes.
///
/// `des::TdesEde3` is keyed with k1 || k2 || k3, so the three sub-keys are
/// joined back in order. A key shape that does not match the cipher family
/// is rejected rather than silently reinterpreted.
pub(super) fn key_material(cipher: CipherId, key: &DerivedKey) -> Result<KeyMaterial> {
    let triple = matches!(
        cipher,
        CipherId::DesEde3Cbc | CipherId::DesEde3Cfb | CipherId::DesEde3
    );
    match (key, triple) {
        (DerivedKey::Single(k), false) => Ok(KeyMaterial::new(k.expose_secret().clone())),
        (DerivedKey::TripleSplit(..), true) => Ok(key.to_contiguous()),
        (DerivedKey::Single(_), true) => Err(CoreError::primitive(format!(
            "{cipher} needs a three-part key"
        ))),
        (DerivedKey::TripleSplit(..), false) => Err(CoreError::primitive(format!(
            "{cipher} takes a single contiguous key"
        ))),
    }
}

pub(super) fn inner<C: KeyInit>(key: &[u8]) -> Result<C> {
    C::new_from_slice(key).map_err(CoreError::primitive)
}

// Effective key bits follow the key length, as OpenSSL's rc2-cbc does
pub(super) fn rc2(key: &[u8]) -> Result<Rc2> {
    if key.is_empty() || key.len() > 128 {
        return Err(CoreError::primitive(format!(
            "rc2 key must be 1..=128 bytes, got {}",
            key.len()
        )));
    }
    Ok(Rc2::new_with_eff_key_len(key, key.len() * 8))
}

/// OFB is symmetric: the same keystream encrypts and decrypts
pub(super) fn ofb_keystream(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let core = ofb::OfbCore::<Blowfish>::inner_iv_slice_init(inner(key)?, iv)
        .map_err(CoreError::primitive)?;
    let mut stream = ofb::Ofb::<Blowfish>::from_core(core);
    let mut out = data.to_vec();
    stream.apply_keystream(&mut out);
    Ok(out)
}

pub(super) fn aligned(len: usize, block_size: usize) -> Result<()> {
    if len % block_size != 0 {
        return Err(CoreError::primitive(format!(
            "{len} bytes is not a multiple of the {block_size}-byte cipher block"
        )));
    }
    Ok(())
}

pub(super) fn no_iv(cipher: CipherId, iv: &[u8]) -> Result<()> {
    if !iv.is_empty() {
        return Err(CoreError::primitive(format!(
            "{cipher} takes no IV, got {} bytes",
            iv.len()
        )));
    }
    Ok(())
}

pub(super) fn unavailable(cipher: CipherId) -> CoreError {
    CoreError::primitive(format!("{cipher} is not implemented by this backend"))
}
