//! Memory reader
//!
//! Available and total memory from `/proc/meminfo`, reported in MB.

use std::fs::File;
use std::io::{BufRead, BufReader};

use serde::{Deserialize, Serialize};

use crate::error::{FactError, Result};
use crate::facts::fields::{self, Delimiter, FieldTable, Malformed};

const MEMINFO: &str = "/proc/meminfo";

/// Lines look like `MemTotal:       16384000 kB`; the colon and the run
/// of spaces both separate tokens, and the trailing unit is simply the
/// third token, which the tokenizer never reaches.
const MEMINFO_DELIMITERS: &[char] = &[':', ' ', '\t'];

const REQUIRED_KEYS: &[&str] = &["MemAvailable", "MemTotal"];

/// Memory usage in megabytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub available_mb: u64,
    pub total_mb: u64,
}

impl MemoryInfo {
    pub fn detect() -> Result<Self> {
        let file = File::open(MEMINFO).map_err(|source| FactError::Io {
            path: MEMINFO.to_string(),
            source,
        })?;
        let info = Self::from_reader(BufReader::new(file), MEMINFO)?;
        tracing::debug!(
            available_mb = info.available_mb,
            total_mb = info.total_mb,
            "detected memory"
        );
        Ok(info)
    }

    pub(crate) fn from_reader<R: BufRead>(source: R, label: &str) -> Result<Self> {
        let stop = |table: &FieldTable| table.has_all(REQUIRED_KEYS);
        let table = fields::scan(
            source,
            label,
            Delimiter::AnyOf(MEMINFO_DELIMITERS),
            Malformed::Skip,
            Some(&stop),
        )?;

        // Kernel reports kilobytes; integer division, remainder discarded.
        Ok(MemoryInfo {
            available_mb: table.require_u64("MemAvailable")? / 1024,
            total_mb: table.require_u64("MemTotal")? / 1024,
        })
    }
}
