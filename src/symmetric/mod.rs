// src/symmetric/mod.rs
//! Authenticated symmetric envelopes
//!
//! Two wire formats share the `tag#iv#ciphertext#mac` shape:
//! - `sym1` ([`SymmetricScheme::Legacy`]): AES-256 key truncated from the
//!   secret, IV wrapped with a single ECB block, AES-256-CFB body,
//!   HMAC-SHA256 over `encrypted_iv ++ ciphertext`.
//! - `sym2` ([`SymmetricScheme::Aead`]): HKDF-SHA256 key, AES-256-GCM with
//!   the tag string as associated data. Nonce and GCM tag fill the IV and
//!   MAC slots.
//!
//! `encrypt` writes whichever scheme the global config selects; `decrypt`
//! reads both. Integrity is always checked before any plaintext exists.

mod aead;
mod legacy;

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use tracing::debug;

use crate::config;
use crate::enums::SymmetricScheme;
use crate::envelope;
use crate::error::{CryptoError, Result};
use crate::key_ops::check_secret_key;

/// Field count of a symmetric envelope, tag included
const ENVELOPE_FIELDS: usize = 4;

/// Encrypt with the configured scheme
pub fn encrypt(plaintext: &[u8], secret_key: &[u8]) -> Result<String> {
    encrypt_with(config::load().symmetric.scheme, plaintext, secret_key)
}

/// Encrypt with an explicit scheme
pub fn encrypt_with(
    scheme: SymmetricScheme,
    plaintext: &[u8],
    secret_key: &[u8],
) -> Result<String> {
    check_secret_key(secret_key)?;

    let sealed = match scheme {
        SymmetricScheme::Legacy => legacy::seal(plaintext, secret_key)?,
        SymmetricScheme::Aead => aead::seal(plaintext, secret_key)?,
    };

    debug!(%scheme, len = plaintext.len(), "symmetric encrypt");
    Ok(envelope::seal(
        scheme.tag(),
        &[
            sealed.iv.as_slice(),
            sealed.ciphertext.as_slice(),
            sealed.mac.as_slice(),
        ],
    ))
}

/// Verify and decrypt a `sym1` or `sym2` envelope
pub fn decrypt(envelope: &str, secret_key: &[u8]) -> Result<Vec<u8>> {
    check_secret_key(secret_key)?;

    let opened = envelope::open(envelope, ENVELOPE_FIELDS)?;
    let scheme = SymmetricScheme::from_tag(opened.tag)
        .ok_or_else(|| CryptoError::format("unknown symmetric envelope tag"))?;

    let mut fields = opened.fields.into_iter();
    let (Some(iv), Some(ciphertext), Some(mac)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(CryptoError::format("missing envelope field"));
    };
    let sealed = Sealed {
        iv,
        ciphertext,
        mac,
    };

    let plaintext = match scheme {
        SymmetricScheme::Legacy => legacy::open(&sealed, secret_key),
        SymmetricScheme::Aead => aead::open(&sealed, secret_key),
    }
    .inspect_err(|e| debug!(%scheme, error = %e, "symmetric decrypt rejected"))?;

    debug!(%scheme, len = plaintext.len(), "symmetric decrypt");
    Ok(plaintext)
}

/// Raw envelope payload before base64
pub(crate) struct Sealed {
    pub iv: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub mac: Vec<u8>,
}

/// Fresh bytes from the OS CSPRNG
fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut out = [0u8; N];
    OsRng
        .try_fill_bytes(&mut out)
        .map_err(|e| CryptoError::environment(format!("OS random source failed: {e}")))?;
    Ok(out)
}
