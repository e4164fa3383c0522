//! CPU reader
//!
//! Model name and physical core count from `/proc/cpuinfo`. The file
//! repeats its fields once per logical processor; this reader stops at
//! the first block that yields both keys, so the reported values always
//! come from processor 0 regardless of how many entries follow. A
//! non-blank line without a `:` ends the scan.

use std::fs::File;
use std::io::{BufRead, BufReader};

use serde::{Deserialize, Serialize};

use crate::error::{FactError, Result};
use crate::facts::fields::{self, Delimiter, FieldTable, Malformed};

const CPUINFO: &str = "/proc/cpuinfo";

const REQUIRED_KEYS: &[&str] = &["model name", "cpu cores"];

/// CPU identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuInfo {
    /// Model string (e.g. "AMD Ryzen 7 5800X 8-Core Processor").
    pub model: String,
    /// Physical core count, displayed verbatim as the kernel reports it.
    pub cores: String,
}

impl CpuInfo {
    pub fn detect() -> Result<Self> {
        let file = File::open(CPUINFO).map_err(|source| FactError::Io {
            path: CPUINFO.to_string(),
            source,
        })?;
        let info = Self::from_reader(BufReader::new(file), CPUINFO)?;
        tracing::debug!(model = %info.model, cores = %info.cores, "detected cpu");
        Ok(info)
    }

    pub(crate) fn from_reader<R: BufRead>(source: R, label: &str) -> Result<Self> {
        let stop = |table: &FieldTable| table.has_all(REQUIRED_KEYS);
        let table = fields::scan(
            source,
            label,
            Delimiter::Char(':'),
            Malformed::Stop,
            Some(&stop),
        )?;

        Ok(CpuInfo {
            model: table.require("model name")?.to_string(),
            cores: table.require("cpu cores")?.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TWO_BLOCKS: &str = "\
processor\t: 0
model name\t: AMD Ryzen 7 5800X 8-Core Processor
cpu cores\t: 8

processor\t: 1
model name\t: imposter
cpu cores\t: 99
";

    #[test]
    fn test_first_block_wins() {
        let info = CpuInfo::from_reader(Cursor::new(TWO_BLOCKS), "cpuinfo").unwrap();
        assert_eq!(info.model, "AMD Ryzen 7 5800X 8-Core Processor");
        assert_eq!(info.cores, "8");
    }

    #[test]
    fn test_keys_trimmed_of_tabs() {
        let input = "model name\t: Intel Core i5\ncpu cores\t: 4\n";
        let info = CpuInfo::from_reader(Cursor::new(input), "cpuinfo").unwrap();
        assert_eq!(info.model, "Intel Core i5");
        assert_eq!(info.cores, "4");
    }

    #[test]
    fn test_line_without_delimiter_stops_scan() {
        let input = "model name\t: Intel Core i5\nnot a field line\ncpu cores\t: 4\n";
        let err = CpuInfo::from_reader(Cursor::new(input), "cpuinfo").unwrap_err();
        assert!(err.to_string().contains("cpu cores"));
    }

    #[test]
    fn test_missing_model_name_fails() {
        let input = "processor\t: 0\ncpu cores\t: 4\n";
        assert!(CpuInfo::from_reader(Cursor::new(input), "cpuinfo").is_err());
    }
}
