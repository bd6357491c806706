// src/key_ops.rs
//! Key derivation and key-material loading
//!
//! Symmetric keys are derived from the caller's secret; RSA keys are
//! parsed from PEM (certificate, SPKI, PKCS#8 or PKCS#1).

use hkdf::Hkdf;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use tracing::debug;
use x509_cert::der::{pem, DecodePem, Encode};
use x509_cert::Certificate;

use crate::aliases::{CipherKey32, PemText};
use crate::consts::{AEAD_KDF_INFO, AES_KEY_LEN, MIN_SECRET_KEY_LEN};
use crate::error::{CryptoError, Result};

/// Reject secrets shorter than the symmetric minimum
pub fn check_secret_key(secret_key: &[u8]) -> Result<()> {
    if secret_key.len() < MIN_SECRET_KEY_LEN {
        return Err(CryptoError::InvalidArgument(format!(
            "secret key must be at least {MIN_SECRET_KEY_LEN} bytes"
        )));
    }
    Ok(())
}

/// Legacy key schedule: first 32 bytes of the secret, zero-padded if shorter.
///
/// No KDF is involved. Only used for `sym1` envelopes.
pub fn truncate_key(secret_key: &[u8]) -> CipherKey32 {
    let mut key = CipherKey32::new([0u8; AES_KEY_LEN]);
    let n = secret_key.len().min(AES_KEY_LEN);
    key.expose_secret_mut()[..n].copy_from_slice(&secret_key[..n]);
    key
}

/// HKDF-SHA256 expansion of the secret for `sym2` envelopes
pub fn derive_aead_key(secret_key: &[u8]) -> Result<CipherKey32> {
    let mut key = CipherKey32::new([0u8; AES_KEY_LEN]);
    Hkdf::<Sha256>::new(None, secret_key)
        .expand(AEAD_KDF_INFO, key.expose_secret_mut())
        .map_err(|_| CryptoError::environment("HKDF-SHA256 cannot produce a 256-bit key"))?;
    Ok(key)
}

/// Public key from an X.509 certificate or a bare `PUBLIC KEY` PEM
pub fn load_public_key(pem_bytes: &[u8]) -> Result<RsaPublicKey> {
    let label = pem::decode_label(pem_bytes)
        .map_err(|_| CryptoError::InvalidArgument("public key material is not PEM".into()))?;

    let spki_der = match label {
        "CERTIFICATE" => {
            let cert = Certificate::from_pem(pem_bytes).map_err(|e| {
                CryptoError::InvalidArgument(format!("unreadable certificate: {e}"))
            })?;
            cert.tbs_certificate
                .subject_public_key_info
                .to_der()
                .map_err(|e| CryptoError::InvalidArgument(format!("bad certificate key: {e}")))?
        }
        "PUBLIC KEY" => {
            let text = std::str::from_utf8(pem_bytes)
                .map_err(|_| CryptoError::InvalidArgument("public key is not UTF-8".into()))?;
            return RsaPublicKey::from_public_key_pem(text)
                .map_err(|e| CryptoError::InvalidArgument(format!("not an RSA public key: {e}")));
        }
        other => {
            return Err(CryptoError::InvalidArgument(format!(
                "unsupported public key PEM label '{other}'"
            )))
        }
    };

    debug!(label, "loaded public key");
    RsaPublicKey::from_public_key_der(&spki_der)
        .map_err(|e| CryptoError::InvalidArgument(format!("not an RSA public key: {e}")))
}

/// Private key from PEM, unlocking it with `passphrase` when encrypted.
///
/// Every failure is `Authentication`: wrong passphrase, missing passphrase,
/// unsupported encoding or an inconsistent key all look the same.
pub fn load_private_key(pem_text: &PemText, passphrase: Option<&str>) -> Result<RsaPrivateKey> {
    let text = pem_text.expose_secret().as_str();
    let label = pem::decode_label(text.as_bytes()).map_err(|_| CryptoError::Authentication)?;

    let key = match label {
        "ENCRYPTED PRIVATE KEY" => {
            let passphrase = passphrase.ok_or(CryptoError::Authentication)?;
            RsaPrivateKey::from_pkcs8_encrypted_pem(text, passphrase.as_bytes()).ok()
        }
        "PRIVATE KEY" => RsaPrivateKey::from_pkcs8_pem(text).ok(),
        "RSA PRIVATE KEY" => RsaPrivateKey::from_pkcs1_pem(text).ok(),
        _ => None,
    };
    let key = key.ok_or_else(|| {
        debug!(label, "private key could not be decoded");
        CryptoError::Authentication
    })?;

    key.validate().map_err(|_| CryptoError::Authentication)?;
    Ok(key)
}

/// Copy a caller-held private key buffer into a zeroize-on-drop PEM string
pub fn private_pem_from_bytes(pem_bytes: &[u8]) -> Result<PemText> {
    let text = std::str::from_utf8(pem_bytes).map_err(|_| CryptoError::Authentication)?;
    Ok(PemText::new(text.to_owned()))
}
