//! Command implementations.
//!
//! Each command writes to an injected `Write` so output can be checked
//! without spawning the binary.

pub mod encrypt;
pub mod generate;

use std::io::Write;

/// Print `value` either raw (quiet) or under a label on its own line.
fn emit(out: &mut dyn Write, label: &str, value: &str, quiet: bool) -> std::io::Result<()> {
    if quiet {
        write!(out, "{value}")?;
    } else {
        writeln!(out, "{label}")?;
        writeln!(out, "{value}")?;
    }
    out.flush()
}
