//! Argon2id v0x13, t=2, m=65536 KiB, p=8, 50-byte output.

use rpasswd_core::hash;

#[test]
fn test_saltsalt() {
    let out = hash(b"test", b"saltsalt", "argon2").expect("argon2 should succeed");
    insta::assert_snapshot!(out, @"0420e24a50588a894124a62643ba8db66c85e8639c7228419aaf4036609bbfae0258f63b6a0d95306735b7da170f6636c02f");
}

#[test]
fn output_is_lowercase_hex() {
    let out = hash(b"", b"saltsalt", "argon2").expect("argon2 should succeed");
    assert_eq!(out.len(), 100);
    assert!(out.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
}
