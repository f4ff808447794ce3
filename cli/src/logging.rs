//! Stderr logging setup.
//!
//! stdout carries only command output so it composes in pipelines; every
//! `tracing` event goes to stderr. Secrets and generated values are never
//! logged.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, LOG_KEY};

/// Install the global subscriber, filtered by `RPASSWD_LOG`.
///
/// A second call is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_KEY).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Fails only if a subscriber is already installed.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .ok();
}
