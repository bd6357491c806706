// src/config/app.rs
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::*;
use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, RSA_PADDING_ENV, SYMMETRIC_SCHEME_ENV};
use crate::enums::{RsaPadding, SymmetricScheme};
use crate::error::{CryptoError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_symmetric")]
    pub symmetric: SymmetricSettings,
    #[serde(default = "default_asymmetric")]
    pub asymmetric: AsymmetricSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymmetricSettings {
    #[serde(default)]
    pub scheme: SymmetricScheme,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AsymmetricSettings {
    #[serde(default)]
    pub padding: RsaPadding,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            symmetric: default_symmetric(),
            asymmetric: default_asymmetric(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CryptoError::Config(e.to_string()))
    }

    /// Apply `ENVELOPE_CRYPTO_*` overrides on top of file values
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(raw) = std::env::var(SYMMETRIC_SCHEME_ENV) {
            self.symmetric.scheme = raw.parse()?;
        }
        if let Ok(raw) = std::env::var(RSA_PADDING_ENV) {
            self.asymmetric.padding = raw.parse()?;
        }
        Ok(self)
    }
}

/// Strict loader: a missing or invalid file is an error
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Config::from_toml_str(&content)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let conf = if Path::new(&config_path).exists() {
            match load_from(&config_path) {
                Ok(conf) => conf,
                Err(e) => {
                    warn!(path = %config_path, error = %e, "ignoring config file, using defaults");
                    Config::default()
                }
            }
        } else {
            debug!(path = %config_path, "no config file, using built-in defaults");
            Config::default()
        };

        conf.clone().with_env_overrides().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring invalid env override");
            conf
        })
    })
}
