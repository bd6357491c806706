// src/config/defaults.rs
use crate::config::app::{AsymmetricSettings, SymmetricSettings};
use crate::enums::{RsaPadding, SymmetricScheme};

pub const DEFAULT_SYMMETRIC_SCHEME: SymmetricScheme = SymmetricScheme::Aead;
pub const DEFAULT_RSA_PADDING: RsaPadding = RsaPadding::OaepSha256;

pub fn default_symmetric() -> SymmetricSettings {
    SymmetricSettings {
        scheme: DEFAULT_SYMMETRIC_SCHEME,
    }
}

pub fn default_asymmetric() -> AsymmetricSettings {
    AsymmetricSettings {
        padding: DEFAULT_RSA_PADDING,
    }
}
