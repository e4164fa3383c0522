//! hostfetch - system information at a glance
//!
//! Gathers a fixed set of host facts (OS, kernel, CPU, GPU, memory,
//! disk, uptime) and prints them next to an ASCII-art logo. Single
//! shot: collect, render, flush, exit. Any reader failure aborts the
//! run before anything is printed.

mod error;
mod exec;
mod facts;
mod render;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::facts::Snapshot;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays clean for the block.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let snapshot = Snapshot::collect().context("failed to gather system information")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render::render(&mut out, &snapshot)?;
    out.flush()?;

    Ok(())
}
