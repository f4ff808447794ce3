//! bcrypt cost 10: random salt, so only round-trips can be checked.

use rpasswd_core::hash;

#[test]
fn round_trips_through_stock_verifier() {
    let out = hash(b"test", b"anything", "bcrypt").expect("bcrypt should succeed");
    assert!(out.starts_with("$2a$10$"), "unexpected encoding: {out}");
    assert!(bcrypt::verify("test", &out).expect("hash should parse"));
}

#[test]
fn empty_password_round_trips() {
    let out = hash(b"", b"", "bcrypt").expect("bcrypt should succeed");
    assert!(bcrypt::verify("", &out).expect("hash should parse"));
    assert!(!bcrypt::verify("x", &out).expect("hash should parse"));
}

#[test]
fn passwords_truncate_at_72_bytes() {
    let long = [b'a'; 80];
    let out = hash(&long, b"", "bcrypt").expect("bcrypt should succeed");
    assert!(bcrypt::verify(&long[..72], &out).expect("hash should parse"));
}
