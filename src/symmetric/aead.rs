// src/symmetric/aead.rs
//! `sym2`: HKDF-SHA256 derived key, AES-256-GCM

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::Aes256Gcm;

use super::{random_bytes, Sealed};
use crate::consts::{GCM_NONCE_LEN, GCM_TAG_LEN, SYMMETRIC_AEAD_TAG};
use crate::error::{CryptoError, Result};
use crate::key_ops::derive_aead_key;

pub(super) fn seal(plaintext: &[u8], secret_key: &[u8]) -> Result<Sealed> {
    let cipher = cipher_for(secret_key)?;
    let nonce: [u8; GCM_NONCE_LEN] = random_bytes()?;

    let mut ciphertext = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(
            GenericArray::from_slice(&nonce),
            SYMMETRIC_AEAD_TAG.as_bytes(),
            &mut ciphertext,
        )
        .map_err(|_| CryptoError::environment("AES-256-GCM refused the plaintext length"))?;

    Ok(Sealed {
        iv: nonce.to_vec(),
        ciphertext,
        mac: tag.to_vec(),
    })
}

pub(super) fn open(sealed: &Sealed, secret_key: &[u8]) -> Result<Vec<u8>> {
    if sealed.iv.len() != GCM_NONCE_LEN {
        return Err(CryptoError::format("nonce field has the wrong length"));
    }
    if sealed.mac.len() != GCM_TAG_LEN {
        return Err(CryptoError::format("MAC field has the wrong length"));
    }

    let cipher = cipher_for(secret_key)?;
    let mut plaintext = sealed.ciphertext.clone();
    // Tag is checked before the keystream is applied
    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(&sealed.iv),
            SYMMETRIC_AEAD_TAG.as_bytes(),
            &mut plaintext,
            GenericArray::from_slice(&sealed.mac),
        )
        .map_err(|_| CryptoError::Integrity)?;

    Ok(plaintext)
}

fn cipher_for(secret_key: &[u8]) -> Result<Aes256Gcm> {
    let key = derive_aead_key(secret_key)?;
    Aes256Gcm::new_from_slice(key.expose_secret())
        .map_err(|_| CryptoError::environment("AES-256-GCM rejected a 32-byte key"))
}
