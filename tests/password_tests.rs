// tests/password_tests.rs
mod common;

use envelope_crypto::consts::PASSWORD_TAG;
use envelope_crypto::password::{hash, iterated_hash, needs_rehash, verify};

#[test]
fn test_hash_then_verify_correct_horse() {
    common::setup();
    let token = hash("correct horse").unwrap();
    assert!(verify("correct horse", &token));
    assert!(!verify("wrong", &token));
}

#[test]
fn test_token_layout() {
    let token = hash("hunter2").unwrap();
    let fields: Vec<&str> = token.split('#').collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0], PASSWORD_TAG);
    assert_eq!(fields[1].len(), 5);
    assert!(fields[1].bytes().all(|b| b.is_ascii_alphanumeric()));
    assert_eq!(fields[2].len(), 40);
    assert!(fields[2].bytes().all(|b| b.is_ascii_hexdigit()));
}

#[test]
fn test_fresh_salt_per_hash() {
    let a = hash("same password").unwrap();
    let b = hash("same password").unwrap();
    assert_ne!(a, b);
    assert!(verify("same password", &a));
    assert!(verify("same password", &b));
}

#[test]
fn test_iterated_hash_known_vectors() {
    assert_eq!(
        iterated_hash("correct horse", "abcde"),
        "d670cf0945adebe6d6921a3e1eb9ca7e361242ff"
    );
    assert_eq!(
        iterated_hash("", "00000"),
        "d6a1d88191d2e5c473bd978ddf6aa3c203444b17"
    );
}

#[test]
fn test_verify_against_precomputed_token() {
    let token = "pwh1#abcde#d670cf0945adebe6d6921a3e1eb9ca7e361242ff";
    assert!(verify("correct horse", token));
    assert!(!verify("correct horse ", token));
}

#[test]
fn test_empty_and_unicode_passwords() {
    for password in ["", "пароль", "🔑🔑"] {
        let token = hash(password).unwrap();
        assert!(verify(password, &token));
        assert!(!verify("x", &token));
    }
}

#[test]
fn test_malformed_tokens_fail_closed() {
    let good = hash("pw").unwrap();
    let digest = good.rsplit('#').next().unwrap().to_string();

    let malformed = [
        String::new(),
        "pwh1".into(),
        "pwh1#".into(),
        "pwh1#ab".into(),
        format!("pwh1#abcd#{digest}"),
        format!("pwh1#abcdef#{digest}"),
        format!("pwh0#abcde#{digest}"),
        format!("pwh1#abcde#{digest}#extra"),
        format!("pwh1#abcde#{}", &digest[..39]),
        "pwh1#ééééé#0000000000000000000000000000000000000000".into(),
        "#####".into(),
    ];
    for token in &malformed {
        assert!(!verify("pw", token), "accepted {token:?}");
        assert!(needs_rehash(token));
    }
    assert!(!needs_rehash(&good));
}

#[test]
fn test_tampered_digest_is_rejected() {
    let token = hash("pw").unwrap();
    let mut bytes = token.into_bytes();
    let last = bytes.len() - 1;
    bytes[last] = if bytes[last] == b'0' { b'1' } else { b'0' };
    let tampered = String::from_utf8(bytes).unwrap();
    assert!(!verify("pw", &tampered));
}
