// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: random alphabets,
//! symmetric schemes and RSA paddings. Each scheme enum maps one-to-one
//! onto an envelope tag so decryption can dispatch on the wire format.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::consts::{
    ASYMMETRIC_OAEP_TAG, ASYMMETRIC_PKCS1_TAG, SYMMETRIC_AEAD_TAG, SYMMETRIC_LEGACY_TAG,
};
use crate::error::CryptoError;

/// Character sets for [`crate::random::generate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RandomAlphabet {
    Alphanumeric,
    Alpha,
    Numeric,
    Hexadecimal,
}

impl RandomAlphabet {
    pub const fn charset(self) -> &'static [u8] {
        match self {
            RandomAlphabet::Alphanumeric => {
                b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"
            }
            RandomAlphabet::Alpha => b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
            RandomAlphabet::Numeric => b"0123456789",
            RandomAlphabet::Hexadecimal => b"0123456789abcdef",
        }
    }
}

impl FromStr for RandomAlphabet {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alphanumeric" => Ok(RandomAlphabet::Alphanumeric),
            "alpha" => Ok(RandomAlphabet::Alpha),
            "numeric" => Ok(RandomAlphabet::Numeric),
            "hexadecimal" | "hex" => Ok(RandomAlphabet::Hexadecimal),
            other => Err(CryptoError::InvalidArgument(format!(
                "unknown random alphabet '{other}'"
            ))),
        }
    }
}

/// Symmetric envelope format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum SymmetricScheme {
    /// ECB-wrapped IV + AES-256-CFB + HMAC-SHA256 over a truncated key.
    /// Kept for compatibility with stored `sym1` blobs.
    Legacy,
    /// HKDF-SHA256 + AES-256-GCM
    #[default]
    Aead,
}

impl SymmetricScheme {
    pub const fn tag(self) -> &'static str {
        match self {
            SymmetricScheme::Legacy => SYMMETRIC_LEGACY_TAG,
            SymmetricScheme::Aead => SYMMETRIC_AEAD_TAG,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            SYMMETRIC_LEGACY_TAG => Some(SymmetricScheme::Legacy),
            SYMMETRIC_AEAD_TAG => Some(SymmetricScheme::Aead),
            _ => None,
        }
    }
}

impl FromStr for SymmetricScheme {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(SymmetricScheme::Legacy),
            "aead" => Ok(SymmetricScheme::Aead),
            other => Err(CryptoError::Config(format!(
                "unknown symmetric scheme '{other}'"
            ))),
        }
    }
}

// Config files and env overrides share one spelling rule
impl TryFrom<String> for SymmetricScheme {
    type Error = CryptoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SymmetricScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// RSA padding used by the asymmetric envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum RsaPadding {
    Pkcs1v15,
    #[default]
    OaepSha256,
}

impl RsaPadding {
    pub const fn tag(self) -> &'static str {
        match self {
            RsaPadding::Pkcs1v15 => ASYMMETRIC_PKCS1_TAG,
            RsaPadding::OaepSha256 => ASYMMETRIC_OAEP_TAG,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            ASYMMETRIC_PKCS1_TAG => Some(RsaPadding::Pkcs1v15),
            ASYMMETRIC_OAEP_TAG => Some(RsaPadding::OaepSha256),
            _ => None,
        }
    }
}

impl FromStr for RsaPadding {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pkcs1v15" => Ok(RsaPadding::Pkcs1v15),
            "oaep-sha256" => Ok(RsaPadding::OaepSha256),
            other => Err(CryptoError::Config(format!("unknown RSA padding '{other}'"))),
        }
    }
}

impl TryFrom<String> for RsaPadding {
    type Error = CryptoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for RsaPadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
