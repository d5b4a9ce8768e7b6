//! Line-oriented prompting on stdin/stdout.

use anyhow::{bail, Result};
use std::io::{self, Write};

/// Prints a prompt and reads one trimmed line from stdin.
///
/// Fails when stdin is closed, so callers never spin on EOF.
pub fn prompt_line(message: &str) -> Result<String> {
    let mut out = io::stdout();
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("Input closed");
    }
    Ok(line.trim().to_string())
}
