// src/config/mod.rs
//! Configuration system for envelope-crypto
//!
//! Central, lazy-loaded global config with TOML + env overrides.
//! Holds scheme choices only — never key material.

pub use app::{load, load_from, AsymmetricSettings, Config, SymmetricSettings};

mod app;
mod defaults;
