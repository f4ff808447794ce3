//! Command-line shell around `rpasswd-core`.
//!
//! Argument parsing and secret prompts live here. All password and
//! KDF logic lives in the core crate.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod args;
pub mod commands;
pub mod config;
pub mod logging;
pub mod prompt;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use args::{Cli, Command};

/// Run the CLI against the process arguments, stdin/stdout and environment.
#[must_use]
pub fn run() -> ExitCode {
    logging::init();

    let cli = Cli::parse();
    let env = config::Environment::read();
    let prompt = prompt::for_environment(&env);
    let mut stdout = io::stdout().lock();

    match dispatch(cli, prompt.as_ref(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("command failed: {err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Route a parsed command line to its command.
///
/// # Errors
///
/// Propagates parameter, prompt, generation and hashing failures.
pub fn dispatch(
    cli: Cli,
    prompt: &dyn prompt::SecretPrompt,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match cli.command {
        None => commands::generate::run(&cli.custom.to_params()?, cli.custom.style.quiet, out),
        Some(Command::Cgen(custom)) => {
            commands::generate::run(&custom.to_params()?, custom.style.quiet, out)
        }
        Some(Command::Gen(gen)) => commands::generate::run(&gen.to_params()?, gen.style.quiet, out),
        Some(Command::Enc(enc)) => commands::encrypt::run(&enc, prompt, out),
    }
}
