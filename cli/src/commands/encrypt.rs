//! `enc`: one-shot KDF hashing of a prompted password.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};

use rpasswd_core::Algorithm;

use crate::args::EncArgs;
use crate::config::{PASSWORD_PROMPT, SALT_PROMPT};
use crate::prompt::SecretPrompt;

/// Validate the algorithm, prompt for password and salt, print the hash.
///
/// The tag is checked before any prompt so a typo fails immediately.
///
/// # Errors
///
/// Returns an unknown algorithm, prompt failures, KDF failures and write
/// errors.
pub fn run(args: &EncArgs, prompt: &dyn SecretPrompt, out: &mut dyn Write) -> Result<()> {
    let algorithm: Algorithm = args.algorithm().parse()?;

    let password = prompt.prompt_secret(PASSWORD_PROMPT)?;
    let salt = prompt.prompt_secret(SALT_PROMPT)?;

    if !algorithm.uses_salt() {
        tracing::debug!("bcrypt embeds its own random salt; the supplied salt is unused");
    }
    tracing::debug!(%algorithm, "deriving hash");
    let started = Instant::now();
    let encoded = rpasswd_core::hash_with(password.as_bytes(), salt.as_bytes(), algorithm)
        .with_context(|| format!("Failed to encrypt password with {algorithm}"))?;
    tracing::debug!(
        %algorithm,
        elapsed_ms = started.elapsed().as_millis(),
        "hash derived"
    );

    super::emit(out, "Password encrypted:", &encoded, args.quiet)?;
    Ok(())
}
