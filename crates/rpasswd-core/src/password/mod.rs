//! Cryptographic password generation with exact per-class composition.
//!
//! [`generate`] draws exactly `digits` characters from [`DIGITS`], exactly
//! `symbols` from [`SYMBOLS`] and fills the rest from the letter alphabet,
//! then Fisher-Yates shuffles the whole sequence so class positions leak
//! nothing. All randomness comes from `OsRng` unless an RNG is injected
//! through [`generate_with`].

pub mod alphabet;

use rand::{CryptoRng, RngCore};

use crate::error::CryptoError;
use crate::random::{rand_int, shuffle};

use alphabet::{letters, DIGITS, SYMBOLS};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default password length.
pub const DEFAULT_LENGTH: usize = 40;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Composition of a password to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenParams {
    /// Total number of characters.
    pub length: usize,
    /// Exact number of characters drawn from [`DIGITS`].
    pub digits: usize,
    /// Exact number of characters drawn from [`SYMBOLS`].
    pub symbols: usize,
    /// Fill the remaining positions from lowercase letters only.
    pub lowercase_only: bool,
    /// Allow a character value to appear more than once.
    pub allow_repeat: bool,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            digits: 0,
            symbols: 0,
            lowercase_only: false,
            allow_repeat: false,
        }
    }
}

impl GenParams {
    /// Build params from signed counts as typed on a command line.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParam`] if any count is negative.
    pub fn from_signed(
        length: i64,
        digits: i64,
        symbols: i64,
        lowercase_only: bool,
        allow_repeat: bool,
    ) -> Result<Self, CryptoError> {
        Ok(Self {
            length: non_negative("length", length)?,
            digits: non_negative("digits", digits)?,
            symbols: non_negative("symbols", symbols)?,
            lowercase_only,
            allow_repeat,
        })
    }

    /// Check the composition and return the number of letter positions.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidParam`] if `digits + symbols > length`
    /// - [`CryptoError::Unsatisfiable`] if repeats are disallowed and a class
    ///   is asked for more characters than its alphabet holds
    pub fn validate(&self) -> Result<usize, CryptoError> {
        let letters_len = self
            .digits
            .checked_add(self.symbols)
            .and_then(|fixed| self.length.checked_sub(fixed))
            .ok_or_else(|| {
                CryptoError::InvalidParam(format!(
                    "digits ({}) + symbols ({}) exceed length ({})",
                    self.digits, self.symbols, self.length
                ))
            })?;

        if !self.allow_repeat {
            let letter_alphabet = letters(self.lowercase_only);
            for (class, wanted, available) in [
                ("digits", self.digits, DIGITS.len()),
                ("symbols", self.symbols, SYMBOLS.len()),
                ("letters", letters_len, letter_alphabet.len()),
            ] {
                if wanted > available {
                    return Err(CryptoError::Unsatisfiable(format!(
                        "{wanted} distinct {class} requested but only {available} exist"
                    )));
                }
            }
        }

        Ok(letters_len)
    }
}

fn non_negative(name: &str, value: i64) -> Result<usize, CryptoError> {
    usize::try_from(value)
        .map_err(|_| CryptoError::InvalidParam(format!("{name} must not be negative, got {value}")))
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a password with the OS CSPRNG.
///
/// # Errors
///
/// See [`generate_with`].
pub fn generate(params: &GenParams) -> Result<String, CryptoError> {
    generate_with(params, &mut rand::rngs::OsRng)
}

/// Generate a password with an injected RNG.
///
/// The output holds exactly `params.length` characters: `params.digits`
/// digits, `params.symbols` symbols and letters for the rest. Without
/// `allow_repeat` every character is distinct.
///
/// # Errors
///
/// - [`CryptoError::InvalidParam`] / [`CryptoError::Unsatisfiable`] from
///   [`GenParams::validate`]
/// - [`CryptoError::InvalidParam`] if the output buffer cannot be allocated
/// - [`CryptoError::EntropyFailure`] if the RNG fails
pub fn generate_with<R>(params: &GenParams, rng: &mut R) -> Result<String, CryptoError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let letters_len = params.validate()?;

    let mut chars: Vec<u8> = Vec::new();
    chars.try_reserve_exact(params.length).map_err(|e| {
        CryptoError::InvalidParam(format!(
            "length {} is too large to allocate: {e}",
            params.length
        ))
    })?;
    for (alphabet, count) in [
        (DIGITS, params.digits),
        (SYMBOLS, params.symbols),
        (letters(params.lowercase_only), letters_len),
    ] {
        draw_class(rng, alphabet.as_bytes(), count, params.allow_repeat, &mut chars)?;
    }

    shuffle(rng, &mut chars)?;

    Ok(chars.into_iter().map(char::from).collect())
}

/// Append `count` uniform draws from `alphabet` to `out`.
///
/// Without repeats, draws come from a shrinking pool and any candidate
/// already present in `out` is discarded and redrawn.
fn draw_class<R>(
    rng: &mut R,
    alphabet: &[u8],
    count: usize,
    allow_repeat: bool,
    out: &mut Vec<u8>,
) -> Result<(), CryptoError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if allow_repeat {
        for _ in 0..count {
            out.push(alphabet[rand_int(rng, alphabet.len())?]);
        }
        return Ok(());
    }

    let mut pool = alphabet.to_vec();
    let mut drawn = 0;
    while drawn < count {
        if pool.is_empty() {
            return Err(CryptoError::Unsatisfiable(format!(
                "alphabet exhausted after {drawn} of {count} distinct characters"
            )));
        }
        let candidate = pool.swap_remove(rand_int(rng, pool.len())?);
        if out.contains(&candidate) {
            continue;
        }
        out.push(candidate);
        drawn = drawn.saturating_add(1);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
