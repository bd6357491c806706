// src/error.rs
//! Public error type for the entire crate

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CryptoError>;

#[derive(Error, Debug)]
pub enum CryptoError {
    /// Caller bug: bad length, alphabet, key size or oversize input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A primitive could not be initialised or the RNG failed
    #[error("crypto environment unavailable: {0}")]
    Environment(String),

    /// Malformed envelope — names the structural check, never the content
    #[error("malformed envelope: {0}")]
    Format(String),

    #[error("data was tampered with or corrupted")]
    Integrity,

    #[error("private key could not be unlocked or is unusable")]
    Authentication,

    #[error("key file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied reading key file: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CryptoError {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        CryptoError::Format(msg.into())
    }

    pub(crate) fn environment(msg: impl Into<String>) -> Self {
        CryptoError::Environment(msg.into())
    }
}
