//! Password generation and key-derivation dispatch for `rpasswd`.
//!
//! Two entry points carry the whole contract:
//! - [`generate`] draws a random password with exact per-class counts
//! - [`hash`] runs one of four pinned KDF parameterizations and encodes the result
//!
//! Pure functions over their inputs plus the OS CSPRNG: zero I/O, zero logging.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod encoding;
pub mod error;
pub mod kdf;
pub mod password;
pub mod random;

pub use encoding::to_hex;
pub use error::CryptoError;
pub use kdf::{
    hash, hash_with, Algorithm, Argon2idParams, ScryptParams, ARGON2ID_PARAMS, BCRYPT_COST,
    OUTPUT_LEN, PBKDF2_ITERATIONS, SCRYPT_PARAMS,
};
pub use password::alphabet::{DIGITS, LETTERS, LOWER, SYMBOLS, UPPER};
pub use password::{generate, generate_with, GenParams, DEFAULT_LENGTH};
pub use random::{rand_int, shuffle};
