//! `gen`, `cgen` and the root command.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use zeroize::Zeroizing;

use rpasswd_core::GenParams;

/// Generate one password and print it.
///
/// # Errors
///
/// Returns invalid or unsatisfiable parameters, entropy failures and
/// write errors.
pub fn run(params: &GenParams, quiet: bool, out: &mut dyn Write) -> Result<()> {
    if !quiet {
        writeln!(out, "Generating password {} characters long...", params.length)?;
    }

    tracing::debug!(
        length = params.length,
        digits = params.digits,
        symbols = params.symbols,
        lowercase_only = params.lowercase_only,
        allow_repeat = params.allow_repeat,
        "generating password"
    );
    let started = Instant::now();
    let password = Zeroizing::new(
        rpasswd_core::generate(params).context("Failed to generate password")?,
    );
    tracing::debug!(elapsed_us = started.elapsed().as_micros(), "password generated");

    super::emit(out, "Password generated:", &password, quiet)?;
    Ok(())
}
