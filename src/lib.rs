// src/lib.rs
//! envelope-crypto — password tokens and self-describing encrypted envelopes
//!
//! Features:
//! - Salted, iterated password tokens with constant-time verification
//! - Symmetric envelopes: AES-256-GCM (`sym2`) or the legacy CFB + HMAC format (`sym1`)
//! - RSA envelopes over X.509 certificates and (encrypted) PEM private keys
//! - Derived keys and private-key text wiped on drop via secure-gate

pub mod aliases;
pub mod asymmetric;
pub mod config;
pub mod consts;
pub mod enums;
pub mod envelope;
pub mod error;
pub mod file_ops;
pub mod key_ops;
pub mod password;
pub mod random;
pub mod symmetric;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use enums::{RandomAlphabet, RsaPadding, SymmetricScheme};
pub use error::{CryptoError, Result};
