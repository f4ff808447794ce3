//! Fixed character classes.
//!
//! All classes are pure ASCII and pairwise disjoint.

/// Lowercase letters (26).
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase letters (26).
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase followed by uppercase letters (52).
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits (10).
pub const DIGITS: &str = "0123456789";

/// ASCII punctuation subset (30).
pub const SYMBOLS: &str = "~!@#$%^&*()_+`-={}|[]\\:\"<>?,./";

/// Letter alphabet used for the non-digit, non-symbol positions.
#[must_use]
pub const fn letters(lowercase_only: bool) -> &'static str {
    if lowercase_only {
        LOWER
    } else {
        LETTERS
    }
}
