// src/random.rs
//! Random strings over a fixed alphabet
//!
//! Backed by the thread-local `rand::rng()`. Good enough for salts and
//! identifiers; IVs and nonces come from the OS CSPRNG in `symmetric`.

use rand::Rng;

use crate::enums::RandomAlphabet;
use crate::error::{CryptoError, Result};

/// Generate `length` characters, each drawn uniformly from `alphabet`
pub fn generate(length: usize, alphabet: RandomAlphabet) -> Result<String> {
    if length < 1 {
        return Err(CryptoError::InvalidArgument(
            "random string length must be at least 1".into(),
        ));
    }

    let charset = alphabet.charset();
    let mut rng = rand::rng();
    Ok((0..length)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect())
}

/// Same as [`generate`] but takes the alphabet by name (`"numeric"`, `"hex"`, ...)
pub fn generate_named(length: usize, alphabet: &str) -> Result<String> {
    generate(length, alphabet.parse()?)
}
