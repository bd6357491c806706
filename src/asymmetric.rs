// src/asymmetric.rs
//! RSA envelopes over certificate / PEM key material
//!
//! Wire format: `asym1#<b64>` (PKCS#1 v1.5) or `asym2#<b64>` (OAEP-SHA256).
//! Plaintext is bounded by the modulus; callers chunk larger payloads.

use std::path::Path;

use aes_gcm::aead::OsRng;
use rsa::{Oaep, Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use tracing::debug;

use crate::config;
use crate::enums::RsaPadding;
use crate::envelope;
use crate::error::{CryptoError, Result};
use crate::file_ops::{read_private_material, read_public_material};
use crate::key_ops::{load_private_key, load_public_key, private_pem_from_bytes};

/// Field count of an asymmetric envelope, tag included
const ENVELOPE_FIELDS: usize = 2;

/// Encrypt for the certificate at `public_cert_path` with the configured padding
pub fn encrypt<P: AsRef<Path>>(plaintext: &[u8], public_cert_path: P) -> Result<String> {
    encrypt_with(config::load().asymmetric.padding, plaintext, public_cert_path)
}

pub fn encrypt_with<P: AsRef<Path>>(
    padding: RsaPadding,
    plaintext: &[u8],
    public_cert_path: P,
) -> Result<String> {
    let pem = read_public_material(public_cert_path)?;
    encrypt_with_pem(padding, plaintext, &pem)
}

/// Encrypt for a certificate or `PUBLIC KEY` PEM held in memory
pub fn encrypt_with_pem(padding: RsaPadding, plaintext: &[u8], pem: &[u8]) -> Result<String> {
    let public_key = load_public_key(pem)?;
    let ciphertext = rsa_encrypt(&public_key, padding, plaintext)?;
    debug!(%padding, len = plaintext.len(), "asymmetric encrypt");
    Ok(envelope::seal(padding.tag(), &[ciphertext.as_slice()]))
}

/// Decrypt with the private key at `private_key_path`
pub fn decrypt<P: AsRef<Path>>(
    envelope: &str,
    private_key_path: P,
    passphrase: Option<&str>,
) -> Result<Vec<u8>> {
    let pem = read_private_material(private_key_path)?;
    let private_key = load_private_key(&pem, passphrase)?;
    open_with(envelope, &private_key)
}

/// Decrypt with a private key PEM held in memory
pub fn decrypt_with_pem(envelope: &str, pem: &[u8], passphrase: Option<&str>) -> Result<Vec<u8>> {
    let pem = private_pem_from_bytes(pem)?;
    let private_key = load_private_key(&pem, passphrase)?;
    open_with(envelope, &private_key)
}

fn open_with(envelope: &str, private_key: &RsaPrivateKey) -> Result<Vec<u8>> {
    let opened = envelope::open(envelope, ENVELOPE_FIELDS)?;
    let padding = RsaPadding::from_tag(opened.tag)
        .ok_or_else(|| CryptoError::format("unknown asymmetric envelope tag"))?;
    let ciphertext = opened
        .fields
        .first()
        .ok_or_else(|| CryptoError::format("missing envelope field"))?;

    let plaintext = match padding {
        RsaPadding::Pkcs1v15 => {
            private_key.decrypt_blinded(&mut OsRng, Pkcs1v15Encrypt, ciphertext)
        }
        RsaPadding::OaepSha256 => {
            private_key.decrypt_blinded(&mut OsRng, Oaep::new::<Sha256>(), ciphertext)
        }
    }
    .map_err(|_| {
        debug!(%padding, "asymmetric decrypt rejected");
        CryptoError::Integrity
    })?;

    debug!(%padding, len = plaintext.len(), "asymmetric decrypt");
    Ok(plaintext)
}

fn rsa_encrypt(
    public_key: &RsaPublicKey,
    padding: RsaPadding,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let result = match padding {
        RsaPadding::Pkcs1v15 => public_key.encrypt(&mut OsRng, Pkcs1v15Encrypt, plaintext),
        RsaPadding::OaepSha256 => public_key.encrypt(&mut OsRng, Oaep::new::<Sha256>(), plaintext),
    };

    result.map_err(|e| match e {
        rsa::Error::MessageTooLong => CryptoError::InvalidArgument(format!(
            "plaintext of {} bytes exceeds the {padding} limit for this key",
            plaintext.len()
        )),
        other => CryptoError::environment(format!("RSA encryption failed: {other}")),
    })
}
