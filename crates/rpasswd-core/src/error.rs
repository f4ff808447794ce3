//! Error types for `rpasswd-core`.

use thiserror::Error;

use crate::kdf::Algorithm;

/// Errors produced by password generation and key derivation.
///
/// Messages never carry password, salt or generated material.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Numeric arguments out of domain or inconsistent with each other.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// The composition needs more distinct characters than the alphabets hold.
    #[error("unsatisfiable composition: {0}")]
    Unsatisfiable(String),

    /// Algorithm tag is not one of `bcrypt`, `scrypt`, `argon2`, `pbkdf2`.
    #[error("`{0}` is not a supported key derivation function hash")]
    UnknownAlgorithm(String),

    /// The CSPRNG returned an error.
    #[error("entropy source failure: {0}")]
    EntropyFailure(String),

    /// An underlying KDF primitive failed.
    #[error("{algorithm} hashing failed: {reason}")]
    Hash {
        /// Algorithm whose primitive reported the failure.
        algorithm: Algorithm,
        /// Primitive error description.
        reason: String,
    },
}

impl CryptoError {
    pub(crate) fn hash(algorithm: Algorithm, reason: impl std::fmt::Display) -> Self {
        Self::Hash {
            algorithm,
            reason: reason.to_string(),
        }
    }
}
