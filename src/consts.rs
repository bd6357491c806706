// src/consts.rs
//! Shared constants — wire tags and security parameters

/// Field delimiter for every token and envelope
pub const DELIMITER: char = '#';

/// Password token tag (iterated SHA-1, 5-char salt)
pub const PASSWORD_TAG: &str = "pwh1";

/// Legacy symmetric envelope: ECB-wrapped IV, AES-256-CFB, HMAC-SHA256
pub const SYMMETRIC_LEGACY_TAG: &str = "sym1";

/// AEAD symmetric envelope: HKDF-SHA256 key, AES-256-GCM
pub const SYMMETRIC_AEAD_TAG: &str = "sym2";

/// RSA envelope with PKCS#1 v1.5 padding
pub const ASYMMETRIC_PKCS1_TAG: &str = "asym1";

/// RSA envelope with OAEP-SHA256 padding
pub const ASYMMETRIC_OAEP_TAG: &str = "asym2";

pub const SALT_LEN: usize = 5;
pub const DIGEST_HEX_LEN: usize = 40;

/// Work factor for the iterated password digest
pub const PASSWORD_HASH_ROUNDS: usize = 1000;

/// Shortest secret key accepted by the symmetric cipher
pub const MIN_SECRET_KEY_LEN: usize = 8;

pub const AES_KEY_LEN: usize = 32;
pub const AES_BLOCK_LEN: usize = 16;
pub const GCM_NONCE_LEN: usize = 12;
pub const GCM_TAG_LEN: usize = 16;
pub const HMAC_SHA256_LEN: usize = 32;

/// HKDF info string binding derived keys to the AEAD envelope format
pub const AEAD_KDF_INFO: &[u8] = b"envelope-crypto sym2";

/// Env var naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "ENVELOPE_CRYPTO_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "envelope-crypto.toml";
pub const SYMMETRIC_SCHEME_ENV: &str = "ENVELOPE_CRYPTO_SYMMETRIC_SCHEME";
pub const RSA_PADDING_ENV: &str = "ENVELOPE_CRYPTO_RSA_PADDING";
