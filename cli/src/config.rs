//! Defaults and environment for the CLI.
//!
//! There are no configuration files; behaviour is set by flags, with these
//! defaults, plus a couple of environment keys.

use std::env::VarError;

/// Default password length.
pub const DEFAULT_LENGTH: i64 = 40;

/// Digit count `gen --digits` expands to (the whole digit alphabet).
pub const MAX_DIGITS: i64 = 10;

/// Symbol count `gen --symbols` expands to (the whole symbol alphabet).
pub const MAX_SYMBOLS: i64 = 30;

/// Algorithm used by `enc` when none is named.
pub const DEFAULT_ALGORITHM: &str = "pbkdf2";

pub const PASSWORD_PROMPT: &str = "New secure password: ";
pub const SALT_PROMPT: &str = "A random salt (at least 8 bytes): ";

/// `tracing` filter directive for stderr logging.
pub const LOG_KEY: &str = "RPASSWD_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Set to `noninteractive` to read secrets from stdin instead of the TTY.
pub const FRONTEND_KEY: &str = "RPASSWD_FRONTEND";
const FRONTEND_NONINTERACTIVE: &str = "noninteractive";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built @",
    env!("RPASSWD_BUILD_TIME"),
    ")"
);

/// Environment keys read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Environment {
    pub noninteractive: bool,
}

impl Environment {
    #[must_use]
    pub fn read() -> Self {
        Self::from_frontend(std::env::var(FRONTEND_KEY))
    }

    fn from_frontend(frontend: Result<String, VarError>) -> Self {
        let noninteractive = match frontend {
            Ok(frontend) => frontend == FRONTEND_NONINTERACTIVE,
            Err(VarError::NotPresent | VarError::NotUnicode(..)) => false,
        };
        Self { noninteractive }
    }
}
