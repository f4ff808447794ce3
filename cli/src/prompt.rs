//! Hidden-input prompting for the encrypt flow.

use std::io;

use anyhow::{Context, Result};
use zeroize::Zeroizing;

use crate::config::Environment;

/// Source of secrets typed by the user.
pub trait SecretPrompt {
    /// Show `prompt` and read one line without echoing it.
    fn prompt_secret(&self, prompt: &str) -> Result<Zeroizing<String>>;
}

/// Prompts on the controlling terminal with echo disabled.
pub struct TerminalPrompt;

impl SecretPrompt for TerminalPrompt {
    fn prompt_secret(&self, prompt: &str) -> Result<Zeroizing<String>> {
        let secret = rpassword::prompt_password(prompt)
            .context("Failed to read hidden input from the terminal")?;
        Ok(Zeroizing::new(secret))
    }
}

/// Reads newline-terminated secrets from stdin, prompting on stderr.
///
/// For scripts and pipelines without a TTY.
pub struct StdinPrompt;

impl SecretPrompt for StdinPrompt {
    fn prompt_secret(&self, prompt: &str) -> Result<Zeroizing<String>> {
        let secret = rpassword::prompt_password_from_bufread(
            &mut io::stdin().lock(),
            &mut io::stderr(),
            prompt,
        )
        .context("Failed to read input from stdin")?;
        Ok(Zeroizing::new(secret))
    }
}

/// Pick the prompter matching the environment.
#[must_use]
pub fn for_environment(env: &Environment) -> Box<dyn SecretPrompt> {
    if env.noninteractive {
        Box::new(StdinPrompt)
    } else {
        Box::new(TerminalPrompt)
    }
}
