// tests/key_ops_tests.rs
mod common;

use envelope_crypto::key_ops::{check_secret_key, derive_aead_key, truncate_key};
use envelope_crypto::CryptoError;

#[test]
fn test_truncate_key_zero_pads_short_secrets() {
    let key = truncate_key(b"12345678");
    let mut expected = [0u8; 32];
    expected[..8].copy_from_slice(b"12345678");
    assert_eq!(key.expose_secret(), &expected);
}

#[test]
fn test_truncate_key_keeps_first_32_bytes() {
    let secret: Vec<u8> = (0u8..40).collect();
    let key = truncate_key(&secret);
    assert_eq!(key.expose_secret().as_slice(), &secret[..32]);
}

#[test]
fn test_derive_aead_key_is_deterministic_and_not_the_secret() {
    let a = derive_aead_key(b"correct horse battery staple").unwrap();
    let b = derive_aead_key(b"correct horse battery staple").unwrap();
    let c = derive_aead_key(b"correct horse battery stapler").unwrap();
    assert_eq!(a.expose_secret(), b.expose_secret());
    assert_ne!(a.expose_secret(), c.expose_secret());
    assert_ne!(a.expose_secret().as_slice(), &[0u8; 32][..]);
    assert_ne!(
        a.expose_secret()[..28].to_vec(),
        b"correct horse battery staple".to_vec()
    );
}

#[test]
fn test_check_secret_key_boundary() {
    assert!(check_secret_key(b"12345678").is_ok());
    assert!(matches!(
        check_secret_key(b"1234567"),
        Err(CryptoError::InvalidArgument(_))
    ));
}
