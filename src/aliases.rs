// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! Every buffer holding derived key material or private-key text goes
//! through one of these so it is wiped on drop.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(CipherKey32, 32); // AES-256 key (legacy truncation or HKDF output)

// Dynamic secrets
dynamic_alias!(PemText, String); // private key PEM as read from disk or caller buffer
