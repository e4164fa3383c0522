//! OS identity reader
//!
//! Pulls the human-readable distribution name out of `/etc/os-release`.

use std::fs::File;
use std::io::{BufRead, BufReader};

use serde::{Deserialize, Serialize};

use crate::error::{FactError, Result};
use crate::facts::fields::{self, Delimiter, FieldTable, Malformed};

const OS_RELEASE: &str = "/etc/os-release";

/// Operating system identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsInfo {
    /// Distribution name as shipped in PRETTY_NAME (e.g. "Ubuntu 22.04 LTS").
    pub name: String,
}

impl OsInfo {
    pub fn detect() -> Result<Self> {
        let file = File::open(OS_RELEASE).map_err(|source| FactError::Io {
            path: OS_RELEASE.to_string(),
            source,
        })?;
        let info = Self::from_reader(BufReader::new(file), OS_RELEASE)?;
        tracing::debug!(name = %info.name, "detected os identity");
        Ok(info)
    }

    pub(crate) fn from_reader<R: BufRead>(source: R, label: &str) -> Result<Self> {
        let stop = |table: &FieldTable| table.has_all(&["PRETTY_NAME"]);
        let table = fields::scan(
            source,
            label,
            Delimiter::Char('='),
            Malformed::Skip,
            Some(&stop),
        )?;

        let raw = table.require("PRETTY_NAME")?;
        Ok(OsInfo {
            name: strip_quotes(raw),
        })
    }
}

/// Drop exactly one leading and one trailing character. os-release
/// values are quoted; the characters are assumed to be the quotes and
/// are not validated.
fn strip_quotes(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    chars.collect()
}
