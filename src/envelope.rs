// src/envelope.rs
//! Tagged `#`-delimited envelope codec shared by both ciphers
//!
//! Fields after the tag are standard padded base64, which never
//! contains the delimiter.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::consts::DELIMITER;
use crate::error::{CryptoError, Result};

/// Join `tag` and base64-encoded `fields`
pub fn seal(tag: &str, fields: &[&[u8]]) -> String {
    let mut out = String::from(tag);
    for field in fields {
        out.push(DELIMITER);
        out.push_str(&STANDARD.encode(field));
    }
    out
}

/// Parsed envelope: the tag plus decoded payload fields
#[derive(Debug)]
pub struct Opened<'a> {
    pub tag: &'a str,
    pub fields: Vec<Vec<u8>>,
}

/// Split into exactly `expected` fields (tag included) and decode the payload
pub fn open(envelope: &str, expected: usize) -> Result<Opened<'_>> {
    let parts: Vec<&str> = envelope.split(DELIMITER).collect();
    if parts.len() != expected {
        return Err(CryptoError::format(format!(
            "expected {expected} fields, found {}",
            parts.len()
        )));
    }

    let fields = parts[1..]
        .iter()
        .map(|part| {
            STANDARD
                .decode(part)
                .map_err(|_| CryptoError::format("field is not valid base64"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Opened {
        tag: parts[0],
        fields,
    })
}
