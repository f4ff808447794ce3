//! PBKDF2-HMAC-SHA256, 10000 iterations, 50-byte output.

use rpasswd_core::hash;

#[test]
fn test_saltsalt() {
    let out = hash(b"test", b"saltsalt", "pbkdf2").expect("pbkdf2 should succeed");
    insta::assert_snapshot!(out, @"30c4856b16a258ad1265e1c22c760e04aab7c6f380a01776c169975db4796a9e345805259782dd3c574a59e00559149343c9");
}

#[test]
fn empty_password_and_salt() {
    let out = hash(b"", b"", "pbkdf2").expect("pbkdf2 should succeed");
    insta::assert_snapshot!(out, @"0d60c695f7e95db4f9557f5b2410e77b296801a818bd99ffb8d3dd4972b28c5088341941719ec8689f071e9f4452427c6ad7");
}

#[test]
fn fallback_algorithm_matches_pbkdf2() {
    let fallback = rpasswd_core::Algorithm::parse_or_default("sha1");
    let out = rpasswd_core::hash_with(b"test", b"saltsalt", fallback)
        .expect("pbkdf2 should succeed");
    assert_eq!(
        out,
        hash(b"test", b"saltsalt", "pbkdf2").expect("pbkdf2 should succeed")
    );
}
