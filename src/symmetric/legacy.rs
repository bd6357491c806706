// src/symmetric/legacy.rs
//! `sym1`: ECB-wrapped IV, AES-256-CFB, HMAC-SHA256 (encrypt-then-MAC)
//!
//! Known weaknesses, kept for compatibility with stored blobs: the key is
//! the raw secret truncated or zero-padded to 32 bytes, and the single-block
//! ECB wrap reveals when two envelopes under one key share an IV.

use aes::cipher::{AsyncStreamCipher, BlockDecrypt, BlockEncrypt, KeyInit, KeyIvInit};
use aes::{Aes256, Block};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::{random_bytes, Sealed};
use crate::consts::{AES_BLOCK_LEN, HMAC_SHA256_LEN};
use crate::error::{CryptoError, Result};
use crate::key_ops::truncate_key;

type HmacSha256 = Hmac<Sha256>;
type Aes256CfbEnc = cfb_mode::Encryptor<Aes256>;
type Aes256CfbDec = cfb_mode::Decryptor<Aes256>;

pub(super) fn seal(plaintext: &[u8], secret_key: &[u8]) -> Result<Sealed> {
    let key = truncate_key(secret_key);
    let block_cipher = Aes256::new_from_slice(key.expose_secret())
        .map_err(|_| CryptoError::environment("AES-256 rejected a 32-byte key"))?;

    let iv: [u8; AES_BLOCK_LEN] = random_bytes()?;

    let mut wrapped_iv = Block::from(iv);
    block_cipher.encrypt_block(&mut wrapped_iv);

    let mut ciphertext = plaintext.to_vec();
    Aes256CfbEnc::new_from_slices(key.expose_secret(), &iv)
        .map_err(|_| CryptoError::environment("AES-256-CFB rejected key or IV size"))?
        .encrypt(&mut ciphertext);

    let iv = wrapped_iv.to_vec();
    let mac = mac_over(secret_key, &iv, &ciphertext)?
        .finalize()
        .into_bytes()
        .to_vec();

    Ok(Sealed {
        iv,
        ciphertext,
        mac,
    })
}

pub(super) fn open(sealed: &Sealed, secret_key: &[u8]) -> Result<Vec<u8>> {
    if sealed.iv.len() != AES_BLOCK_LEN {
        return Err(CryptoError::format("IV field has the wrong length"));
    }
    if sealed.mac.len() != HMAC_SHA256_LEN {
        return Err(CryptoError::format("MAC field has the wrong length"));
    }

    // Verify before touching the cipher
    mac_over(secret_key, &sealed.iv, &sealed.ciphertext)?
        .verify_slice(&sealed.mac)
        .map_err(|_| CryptoError::Integrity)?;

    let key = truncate_key(secret_key);
    let block_cipher = Aes256::new_from_slice(key.expose_secret())
        .map_err(|_| CryptoError::environment("AES-256 rejected a 32-byte key"))?;

    let mut iv = Block::clone_from_slice(&sealed.iv);
    block_cipher.decrypt_block(&mut iv);

    let mut plaintext = sealed.ciphertext.clone();
    Aes256CfbDec::new_from_slices(key.expose_secret(), &iv)
        .map_err(|_| CryptoError::environment("AES-256-CFB rejected key or IV size"))?
        .decrypt(&mut plaintext);

    Ok(plaintext)
}

fn mac_over(secret_key: &[u8], wrapped_iv: &[u8], ciphertext: &[u8]) -> Result<HmacSha256> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(secret_key)
        .map_err(|_| CryptoError::environment("HMAC-SHA256 rejected the key"))?;
    mac.update(wrapped_iv);
    mac.update(ciphertext);
    Ok(mac)
}
