//! Error taxonomy for fact collection
//!
//! Every reader fails fast: the first error aborts the run before any
//! output is rendered, so each variant carries enough context to name
//! the operation that failed.

use std::io;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactError {
    /// Could not open or read a required source file.
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A key every run depends on was absent from a parsed field table.
    #[error("required field `{key}` not found in {path}")]
    MissingField { key: &'static str, path: String },

    /// A field value that must be numeric was not.
    #[error("field `{key}` in {path} is not an integer: `{value}`")]
    InvalidInt {
        key: &'static str,
        path: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A raw system call reported failure.
    #[error("{call} failed with errno {errno}")]
    Sys { call: &'static str, errno: i32 },

    /// A host query the sysinfo crate could not answer.
    #[error("could not determine {what}")]
    Unavailable { what: &'static str },

    /// A required environment variable is unset.
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// An external helper could not be spawned.
    #[error("failed to run `{command}`")]
    Spawn {
        command: &'static str,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FactError>;
