// src/crypto/decrypt.rs
use aes::{Aes128, Aes256};
use blowfish::Blowfish;
use cipher::block_padding::NoPadding;
use cipher::{BlockDecryptMut, InnerIvInit, KeyInit};
use des::{Des, TdesEde3};
use rc2::Rc2;

use super::encrypt::{aligned, inner, key_material, no_iv, ofb_keystream, rc2, unavailable};
use crate::core::key::DerivedKey;
use crate::enums::CipherId;
use crate::error::{CoreError, Result};

/// Raw mode decryption; the result still carries its padding
pub(super) fn decrypt(
    cipher: CipherId,
    key: &DerivedKey,
    iv: &[u8],
    data: &[u8],
) -> Result<Vec<u8>> {
    let material = key_material(cipher, key)?;
    let k = material.expose_secret().as_slice();

    match cipher {
        CipherId::DesCbc => run::<cbc::Decryptor<Des>>(inner(k)?, iv, data),
        CipherId::DesCfb => run::<cfb_mode::Decryptor<Des>>(inner(k)?, iv, data),
        CipherId::DesEde3Cbc => run::<cbc::Decryptor<TdesEde3>>(inner(k)?, iv, data),
        CipherId::DesEde3Cfb => run::<cfb_mode::Decryptor<TdesEde3>>(inner(k)?, iv, data),
        CipherId::DesEde3 => {
            no_iv(cipher, iv)?;
            aligned(data.len(), 8)?;
            let mode = ecb::Decryptor::<TdesEde3>::new_from_slice(k)
                .map_err(CoreError::primitive)?;
            mode.decrypt_padded_vec_mut::<NoPadding>(data)
                .map_err(CoreError::primitive)
        }
        CipherId::BlowfishCbc => run::<cbc::Decryptor<Blowfish>>(inner(k)?, iv, data),
        CipherId::BlowfishCfb64 => run::<cfb_mode::Decryptor<Blowfish>>(inner(k)?, iv, data),
        CipherId::BlowfishOfb64 => ofb_keystream(k, iv, data),
        CipherId::Rc2Cbc => run::<cbc::Decryptor<Rc2>>(rc2(k)?, iv, data),
        CipherId::AesCbc | CipherId::AesCbc256 => {
            run::<cbc::Decryptor<Aes256>>(inner(k)?, iv, data)
        }
        CipherId::AesCbc128 => run::<cbc::Decryptor<Aes128>>(inner(k)?, iv, data),
        CipherId::AesCfb8 => run::<cfb8::Decryptor<Aes128>>(inner(k)?, iv, data),
        CipherId::AesCfb128 => run::<cfb_mode::Decryptor<Aes128>>(inner(k)?, iv, data),
        CipherId::AesIge256 => run::<ige::Decryptor<Aes256>>(inner(k)?, iv, data),
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
    M: InnerIvInit + BlockDecryptMut,
{
    aligned(data.len(), M::block_size())?;
    let mode = M::inner_iv_slice_init(inner, iv).map_err(CoreError::primitive)?;
    mode.decrypt_padded_vec_mut::<NoPadding>(data)
        .map_err(CoreError::primitive)
}
