//! Command-line surface.
//!
//! Boolean flags follow the `--flag` / `--flag=false` convention so flags
//! that default to `true` can still be switched off.

use clap::{ArgAction, Args, Parser, Subcommand};

use rpasswd_core::{CryptoError, GenParams};

use crate::config::{DEFAULT_ALGORITHM, DEFAULT_LENGTH, LONG_VERSION, MAX_DIGITS, MAX_SYMBOLS};

// ---------------------------------------------------------------------------
// Top level
// ---------------------------------------------------------------------------

/// A secure random password generator tool.
///
/// Without a subcommand, generates a password with exact digit and symbol
/// counts (same flags as `cgen`).
///
/// Example: rpasswd --digits 5 --symbols 5 32
#[derive(Debug, Parser)]
#[command(
    name = "rpasswd",
    version,
    long_version = LONG_VERSION,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub custom: CustomArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a random password with lower-upper case letters, all 10 digits
    /// and all 30 symbols by default
    Gen(GenArgs),

    /// Generate a random password with exact digit and symbol counts
    Cgen(CustomArgs),

    /// Encrypt a password with a key derivation function hash
    Enc(EncArgs),
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Flags shared by every generation command.
#[derive(Debug, Args)]
pub struct StyleArgs {
    /// Allow upper and lower case letters; false for lowercase only
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub uppercase: bool,

    /// Allow characters to repeat
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub repeat: bool,

    /// Print only the password, without a trailing newline
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub quiet: bool,
}

/// `gen`: digits and symbols are all-or-nothing switches.
#[derive(Debug, Args)]
pub struct GenArgs {
    /// Password length; overrides --length
    #[arg(value_name = "LENGTH", allow_negative_numbers = true)]
    pub length_arg: Option<i64>,

    /// Password length
    #[arg(short, long, default_value_t = DEFAULT_LENGTH, allow_negative_numbers = true)]
    pub length: i64,

    /// Include all 10 digit characters
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub digits: bool,

    /// Include all 30 symbol characters
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub symbols: bool,

    #[command(flatten)]
    pub style: StyleArgs,
}

impl GenArgs {
    /// Expand the switches into exact counts.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParam`] for a negative length.
    pub fn to_params(&self) -> Result<GenParams, CryptoError> {
        GenParams::from_signed(
            self.length_arg.unwrap_or(self.length),
            if self.digits { MAX_DIGITS } else { 0 },
            if self.symbols { MAX_SYMBOLS } else { 0 },
            !self.style.uppercase,
            self.style.repeat,
        )
    }
}

/// `cgen` and the root command: digits and symbols are exact counts.
#[derive(Debug, Args)]
pub struct CustomArgs {
    /// Password length; overrides --length
    #[arg(value_name = "LENGTH", allow_negative_numbers = true)]
    pub length_arg: Option<i64>,

    /// Password length
    #[arg(short, long, default_value_t = DEFAULT_LENGTH, allow_negative_numbers = true)]
    pub length: i64,

    /// Quantity of digits (max. 10 without --repeat)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub digits: i64,

    /// Quantity of symbols (max. 30 without --repeat)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub symbols: i64,

    #[command(flatten)]
    pub style: StyleArgs,
}

impl CustomArgs {
    /// Convert the counts into generator params.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidParam`] for negative counts.
    pub fn to_params(&self) -> Result<GenParams, CryptoError> {
        GenParams::from_signed(
            self.length_arg.unwrap_or(self.length),
            self.digits,
            self.symbols,
            !self.style.uppercase,
            self.style.repeat,
        )
    }
}

// ---------------------------------------------------------------------------
// Encryption
// ---------------------------------------------------------------------------

/// `enc`: pick a KDF, then prompt for password and salt.
#[derive(Debug, Args)]
pub struct EncArgs {
    /// Key derivation function hash; overrides --algo
    #[arg(value_name = "ALGORITHM")]
    pub algorithm_arg: Option<String>,

    /// Key derivation function hash: bcrypt, scrypt, argon2 or pbkdf2
    #[arg(short, long = "algo", visible_alias = "hash", default_value = DEFAULT_ALGORITHM)]
    pub algo: String,

    /// Print only the encoded hash, without a trailing newline
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub quiet: bool,
}

impl EncArgs {
    /// The algorithm tag to use, positional first.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        self.algorithm_arg.as_deref().unwrap_or(&self.algo)
    }
}
