//! External command execution
//!
//! The one place the program shells out. Kept narrow so readers that
//! depend on a helper binary can be tested against canned output
//! instead of a real subprocess.

use std::process::Command;

use crate::error::{FactError, Result};

/// Run `command` with no arguments and capture its stdout, blocking the
/// calling thread until it exits. No timeout is applied.
pub fn capture_stdout(command: &'static str) -> Result<String> {
    let output = Command::new(command)
        .output()
        .map_err(|source| FactError::Spawn { command, source })?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
