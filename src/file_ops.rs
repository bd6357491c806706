// src/file_ops.rs
//! Scoped key-file reads
//!
//! Each read opens, slurps and closes the file inside one call, so no
//! handle outlives the operation on any exit path. IO errors are mapped
//! to the path-carrying error kinds callers match on.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::aliases::PemText;
use crate::error::{CryptoError, Result};

/// Read a public certificate or public key file
pub fn read_public_material<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| map_io(path, e))?;
    debug!(path = %path.display(), len = bytes.len(), "read public key material");
    Ok(bytes)
}

/// Read a private key file straight into a zeroize-on-drop buffer
pub fn read_private_material<P: AsRef<Path>>(path: P) -> Result<PemText> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| map_io(path, e))?;
    debug!(path = %path.display(), "read private key material");
    // Non-UTF-8 key files cannot be PEM
    String::from_utf8(bytes)
        .map(|text| PemText::new(text))
        .map_err(|e| {
            let mut raw = e.into_bytes();
            zeroize::Zeroize::zeroize(&mut raw);
            CryptoError::Authentication
        })
}

fn map_io(path: &Path, err: std::io::Error) -> CryptoError {
    match err.kind() {
        ErrorKind::NotFound => CryptoError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => CryptoError::PermissionDenied(path.to_path_buf()),
        _ => CryptoError::Io(err),
    }
}
