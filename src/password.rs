// src/password.rs
//! Salted, iterated password tokens
//!
//! Token layout: `pwh1#<5-char salt>#<40 hex digest>`. The salt is fixed at
//! creation and read back from its field on verification.

use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::consts::{DELIMITER, DIGEST_HEX_LEN, PASSWORD_HASH_ROUNDS, PASSWORD_TAG, SALT_LEN};
use crate::enums::RandomAlphabet;
use crate::error::Result;
use crate::random;

/// Hash `password` under a fresh alphanumeric salt
pub fn hash(password: &str) -> Result<String> {
    let salt = random::generate(SALT_LEN, RandomAlphabet::Alphanumeric)?;
    Ok(build_token(password, &salt))
}

/// Check `password` against a stored token.
///
/// Malformed tokens and wrong passwords both return `false`.
pub fn verify(password: &str, token: &str) -> bool {
    let Some(salt) = extract_salt(token) else {
        debug!("password token rejected: malformed");
        return false;
    };

    let expected = build_token(password, salt);
    expected.as_bytes().ct_eq(token.as_bytes()).into()
}

/// True when `token` is not a well-formed current-format token
pub fn needs_rehash(token: &str) -> bool {
    extract_salt(token).is_none()
}

/// `h0 = SHA1(salt ++ source)`, then 1000 rounds of
/// `h = SHA1(hex(h) ++ (source on even rounds, salt on odd))`.
pub fn iterated_hash(source: &str, salt: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(salt.as_bytes());
    hasher.update(source.as_bytes());
    let mut digest = hex::encode(hasher.finalize());

    for round in 0..PASSWORD_HASH_ROUNDS {
        let mix = if round % 2 == 0 { source } else { salt };
        let mut hasher = Sha1::new();
        hasher.update(digest.as_bytes());
        hasher.update(mix.as_bytes());
        digest = hex::encode(hasher.finalize());
    }

    digest
}

fn build_token(password: &str, salt: &str) -> String {
    format!(
        "{PASSWORD_TAG}{DELIMITER}{salt}{DELIMITER}{}",
        iterated_hash(password, salt)
    )
}

/// Structural check; returns the salt field on success
fn extract_salt(token: &str) -> Option<&str> {
    let mut fields = token.split(DELIMITER);
    let tag = fields.next()?;
    let salt = fields.next()?;
    let digest = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let well_formed = tag == PASSWORD_TAG
        && salt.len() == SALT_LEN
        && salt.bytes().all(|b| b.is_ascii_alphanumeric())
        && digest.len() == DIGEST_HEX_LEN
        && digest.bytes().all(|b| b.is_ascii_hexdigit());

    well_formed.then_some(salt)
}
