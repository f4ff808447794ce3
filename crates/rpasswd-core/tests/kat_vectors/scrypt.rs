//! scrypt N=65536, r=16, p=2, 50-byte output (128 MiB working set).

use rpasswd_core::hash;

#[test]
fn test_saltsalt() {
    let out = hash(b"test", b"saltsalt", "scrypt").expect("scrypt should succeed");
    insta::assert_snapshot!(out, @"1155ce6cffbb961dfc008253119306f36765a9f5e35efc94ba13539d594e0b79328a0298ce7c28ffea17c3ef7d20d696579d");
}

#[test]
fn output_is_deterministic() {
    let a = hash(b"x", b"salty salt", "scrypt").expect("scrypt should succeed");
    let b = hash(b"x", b"salty salt", "scrypt").expect("scrypt should succeed");
    assert_eq!(a, b);
    assert_eq!(a.len(), 100);
}
