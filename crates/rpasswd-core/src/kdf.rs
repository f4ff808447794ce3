//! Key-derivation dispatch with pinned parameter sets.
//!
//! This module provides:
//! - [`hash`]: validate an algorithm tag, derive, encode
//! - [`hash_with`]: the same for an already-parsed [`Algorithm`]
//! - [`Algorithm`]: the four supported tags
//!
//! # Pinned parameters
//!
//! The parameter sets below reproduce the output of existing invocations
//! bit-for-bit and must not drift. A hardened set needs a new tag.
//!
//! | Tag | Primitive | Parameters | Output |
//! |-----|-----------|------------|--------|
//! | `bcrypt` | bcrypt | cost 10, own random salt | `$2a$10$…` (60 ASCII bytes) |
//! | `scrypt` | scrypt | N=65536, r=16, p=2 | 50 bytes, lowercase hex |
//! | `argon2` | Argon2id v0x13 | t=2, m=65536 KiB, p=8 | 50 bytes, lowercase hex |
//! | `pbkdf2` | PBKDF2-HMAC-SHA256 | 10000 iterations | 50 bytes, lowercase hex |
//!
//! scrypt at these parameters needs `128 * N * r` = 128 MiB per call and
//! Argon2id 64 MiB; neither belongs on a latency-critical path.

use std::fmt;
use std::str::FromStr;

use sha2::Sha256;
use zeroize::Zeroizing;

use crate::encoding::to_hex;
use crate::error::CryptoError;

/// Derived key length in bytes for scrypt, Argon2id and PBKDF2.
pub const OUTPUT_LEN: usize = 50;

/// bcrypt cost factor.
pub const BCRYPT_COST: u32 = 10;

/// PBKDF2-HMAC-SHA256 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// scrypt parameters.
pub const SCRYPT_PARAMS: ScryptParams = ScryptParams {
    n: 65_536,
    r: 16,
    p: 2,
};

/// Argon2id parameters.
pub const ARGON2ID_PARAMS: Argon2idParams = Argon2idParams {
    m_cost: 65_536,
    t_cost: 2,
    p_cost: 8,
};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Supported key-derivation algorithms, identified by lowercase tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// bcrypt, self-describing ASCII output.
    Bcrypt,
    /// scrypt, hex output.
    Scrypt,
    /// Argon2id, hex output.
    Argon2,
    /// PBKDF2-HMAC-SHA256, hex output.
    #[default]
    Pbkdf2,
}

impl Algorithm {
    /// Every supported algorithm, in tag order of the CLI help.
    pub const ALL: [Self; 4] = [Self::Bcrypt, Self::Scrypt, Self::Argon2, Self::Pbkdf2];

    /// The exact tag accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bcrypt => "bcrypt",
            Self::Scrypt => "scrypt",
            Self::Argon2 => "argon2",
            Self::Pbkdf2 => "pbkdf2",
        }
    }

    /// Parse a tag, falling back to PBKDF2 for anything unrecognized.
    ///
    /// Only for callers that have already validated the tag or explicitly
    /// want the fallback; [`hash`] rejects unknown tags instead.
    #[must_use]
    pub fn parse_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    /// Whether the caller-supplied salt reaches the primitive.
    #[must_use]
    pub const fn uses_salt(self) -> bool {
        !matches!(self, Self::Bcrypt)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CryptoError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == tag)
            .ok_or_else(|| CryptoError::UnknownAlgorithm(tag.to_string()))
    }
}

/// scrypt cost parameters, with `n` stored directly rather than as log2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScryptParams {
    /// CPU/memory cost; must be a power of two.
    pub n: u32,
    /// Block size.
    pub r: u32,
    /// Parallelization.
    pub p: u32,
}

/// Argon2id parameter set.
///
/// Fields use the `argon2` crate convention:
/// - `m_cost`: memory in KiB (NOT bytes, NOT MB)
/// - `t_cost`: number of iterations
/// - `p_cost`: degree of parallelism
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Argon2idParams {
    /// Memory cost in kibibytes.
    pub m_cost: u32,
    /// Number of iterations (time cost).
    pub t_cost: u32,
    /// Degree of parallelism (number of lanes).
    pub p_cost: u32,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Hash `password` with the algorithm named by `algorithm`.
///
/// `salt` is passed verbatim to scrypt, Argon2id and PBKDF2; bcrypt ignores
/// it and embeds its own random salt in the output.
///
/// Argon2id needs a salt of at least 8 bytes. Shorter salts are rejected
/// with [`CryptoError::Hash`]. Older `rpasswd` releases accepted them, so
/// their short-salt hashes cannot be reproduced.
///
/// # Errors
///
/// - [`CryptoError::UnknownAlgorithm`] if the tag is not recognized
/// - [`CryptoError::Hash`] if the primitive fails
pub fn hash(password: &[u8], salt: &[u8], algorithm: &str) -> Result<String, CryptoError> {
    hash_with(password, salt, algorithm.parse()?)
}

/// Hash `password` with an already-parsed [`Algorithm`].
///
/// # Errors
///
/// Returns [`CryptoError::Hash`] if the primitive fails. Under the pinned
/// parameters this only happens for an Argon2id salt shorter than 8 bytes
/// or an allocation failure.
pub fn hash_with(
    password: &[u8],
    salt: &[u8],
    algorithm: Algorithm,
) -> Result<String, CryptoError> {
    match algorithm {
        Algorithm::Bcrypt => hash_bcrypt(password),
        Algorithm::Scrypt => derive_hex(|out| derive_scrypt(password, salt, out)),
        Algorithm::Argon2 => derive_hex(|out| derive_argon2id(password, salt, out)),
        Algorithm::Pbkdf2 => derive_hex(|out| {
            derive_pbkdf2(password, salt, out);
            Ok(())
        }),
    }
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// Run `derive` into a zeroize-on-drop buffer and hex-encode the result.
fn derive_hex<F>(derive: F) -> Result<String, CryptoError>
where
    F: FnOnce(&mut [u8]) -> Result<(), CryptoError>,
{
    let mut output = Zeroizing::new([0u8; OUTPUT_LEN]);
    derive(output.as_mut_slice())?;
    Ok(to_hex(output.as_slice()))
}

fn hash_bcrypt(password: &[u8]) -> Result<String, CryptoError> {
    bcrypt::hash_with_result(password, BCRYPT_COST)
        .map(|parts| parts.format_for_version(bcrypt::Version::TwoA))
        .map_err(|e| CryptoError::hash(Algorithm::Bcrypt, e))
}

fn derive_scrypt(password: &[u8], salt: &[u8], output: &mut [u8]) -> Result<(), CryptoError> {
    let params = scrypt::Params::new(
        log2(SCRYPT_PARAMS.n)?,
        SCRYPT_PARAMS.r,
        SCRYPT_PARAMS.p,
        output.len(),
    )
    .map_err(|e| CryptoError::hash(Algorithm::Scrypt, format!("invalid scrypt params: {e}")))?;

    scrypt::scrypt(password, salt, &params, output)
        .map_err(|e| CryptoError::hash(Algorithm::Scrypt, e))
}

fn derive_argon2id(password: &[u8], salt: &[u8], output: &mut [u8]) -> Result<(), CryptoError> {
    let params = argon2::Params::new(
        ARGON2ID_PARAMS.m_cost,
        ARGON2ID_PARAMS.t_cost,
        ARGON2ID_PARAMS.p_cost,
        Some(output.len()),
    )
    .map_err(|e| CryptoError::hash(Algorithm::Argon2, format!("invalid argon2 params: {e}")))?;

    argon2::Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
        .hash_password_into(password, salt, output)
        .map_err(|e| CryptoError::hash(Algorithm::Argon2, e))
}

fn derive_pbkdf2(password: &[u8], salt: &[u8], output: &mut [u8]) {
    pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, output);
}

/// Compute log2(n) for scrypt's `log_n` parameter.
///
/// The parameters store N directly (65536) but the `scrypt` crate expects
/// log2(N) (16).
fn log2(n: u32) -> Result<u8, CryptoError> {
    if n == 0 || (n & n.wrapping_sub(1)) != 0 {
        return Err(CryptoError::hash(
            Algorithm::Scrypt,
            format!("scrypt N must be a power of 2, got {n}"),
        ));
    }
    // Safe: n is validated as a power of 2 and u32, so trailing_zeros <= 31 fits u8.
    #[allow(clippy::cast_possible_truncation)]
    Ok(n.trailing_zeros() as u8)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
