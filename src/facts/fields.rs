//! Key-value field table parser
//!
//! All of the text sources this tool reads (`/etc/os-release`,
//! `/proc/meminfo`, `/proc/cpuinfo`) are line-oriented `key<delim>value`
//! files that differ only in their delimiter and in how tolerant the
//! caller is of malformed lines. This module is the one scanner shared
//! by all of them.

use std::collections::HashMap;
use std::io::BufRead;

use crate::error::{FactError, Result};

/// How a line is split into key and value.
#[derive(Debug, Clone, Copy)]
pub enum Delimiter<'a> {
    /// Split on the first occurrence of a single character, trimming
    /// whitespace from both halves (`PRETTY_NAME="Ubuntu"`, `model name : ...`).
    Char(char),
    /// Tokenize on a character set and take the first token as key,
    /// the second as value (`MemTotal:   16384000 kB` -> `16384000`).
    AnyOf(&'a [char]),
}

/// What to do with a non-blank line that has no delimiter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Malformed {
    /// Skip the line and keep scanning.
    Skip,
    /// Treat the line as end of input.
    Stop,
}

/// Ephemeral mapping from field name to field value, built per source.
///
/// Duplicate keys are last-write-wins in line order. The table keeps the
/// label of the source it was scanned from so that lookups can report
/// where a missing field was expected.
#[derive(Debug)]
pub struct FieldTable {
    entries: HashMap<String, String>,
    source: String,
}

impl FieldTable {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// True once every listed key is present; the canonical early-exit
    /// predicate for [`scan`].
    pub fn has_all(&self, keys: &[&str]) -> bool {
        keys.iter().all(|key| self.entries.contains_key(*key))
    }

    /// Look up a key that the run cannot proceed without.
    pub fn require(&self, key: &'static str) -> Result<&str> {
        self.get(key).ok_or_else(|| FactError::MissingField {
            key,
            path: self.source.clone(),
        })
    }

    /// [`require`](Self::require) plus unsigned-integer parsing.
    pub fn require_u64(&self, key: &'static str) -> Result<u64> {
        let value = self.require(key)?;
        value.parse().map_err(|source| FactError::InvalidInt {
            key,
            path: self.source.clone(),
            value: value.to_string(),
            source,
        })
    }
}

/// Scan a line-oriented source into a [`FieldTable`].
///
/// Blank lines are always skipped; `malformed` decides what a non-blank
/// line without a delimiter does. `stop_when` is consulted after every
/// insertion so callers that only need a couple of keys can avoid
/// scanning the whole file.
pub fn scan<R: BufRead>(
    source: R,
    label: &str,
    delimiter: Delimiter<'_>,
    malformed: Malformed,
    stop_when: Option<&dyn Fn(&FieldTable) -> bool>,
) -> Result<FieldTable> {
    let mut table = FieldTable {
        entries: HashMap::new(),
        source: label.to_string(),
    };

    for line in source.lines() {
        let line = line.map_err(|source| FactError::Io {
            path: label.to_string(),
            source,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        match split_line(&line, delimiter) {
            Some((key, value)) => {
                table.entries.insert(key, value);
            }
            None => match malformed {
                Malformed::Skip => continue,
                Malformed::Stop => break,
            },
        }

        if let Some(stop) = stop_when {
            if stop(&table) {
                tracing::trace!(source = label, "field scan stopped early");
                break;
            }
        }
    }

    Ok(table)
}

fn split_line(line: &str, delimiter: Delimiter<'_>) -> Option<(String, String)> {
    match delimiter {
        Delimiter::Char(ch) => {
            let (key, value) = line.split_once(ch)?;
            Some((key.trim().to_string(), value.trim().to_string()))
        }
        Delimiter::AnyOf(set) => {
            let mut tokens = line
                .split(|ch: char| set.contains(&ch))
                .filter(|token| !token.is_empty());
            let key = tokens.next()?;
            let value = tokens.next()?;
            Some((key.to_string(), value.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scan_str(
        input: &str,
        delimiter: Delimiter<'_>,
        malformed: Malformed,
        stop_when: Option<&dyn Fn(&FieldTable) -> bool>,
    ) -> FieldTable {
        scan(Cursor::new(input), "test-input", delimiter, malformed, stop_when).unwrap()
    }

    #[test]
    fn test_char_delimiter_trims_both_sides() {
        let table = scan_str("  key  =  value  \n", Delimiter::Char('='), Malformed::Skip, None);
        assert_eq!(table.get("key"), Some("value"));
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let table = scan_str("K=1\nK=2\n", Delimiter::Char('='), Malformed::Skip, None);
        assert_eq!(table.get("K"), Some("2"));
    }

    #[test]
    fn test_any_of_tokenizes_key_and_value() {
        let table = scan_str(
            "MemTotal:       16384000 kB\n",
            Delimiter::AnyOf(&[':', ' ', '\t']),
            Malformed::Skip,
            None,
        );
        assert_eq!(table.get("MemTotal"), Some("16384000"));
    }

    #[test]
    fn test_blank_lines_always_skipped() {
        let table = scan_str(
            "\na=1\n   \nb=2\n",
            Delimiter::Char('='),
            Malformed::Stop,
            None,
        );
        assert_eq!(table.get("a"), Some("1"));
        assert_eq!(table.get("b"), Some("2"));
    }

    #[test]
    fn test_malformed_skip_continues() {
        let table = scan_str(
            "garbage line\nkey=value\n",
            Delimiter::Char('='),
            Malformed::Skip,
            None,
        );
        assert_eq!(table.get("key"), Some("value"));
    }

    #[test]
    fn test_malformed_stop_ends_scan() {
        let table = scan_str(
            "a=1\ngarbage line\nb=2\n",
            Delimiter::Char('='),
            Malformed::Stop,
            None,
        );
        assert_eq!(table.get("a"), Some("1"));
        assert_eq!(table.get("b"), None);
    }

    #[test]
    fn test_stop_predicate_exits_early() {
        let stop = |table: &FieldTable| table.has_all(&["a"]);
        let table = scan_str(
            "a=1\nb=2\n",
            Delimiter::Char('='),
            Malformed::Skip,
            Some(&stop),
        );
        assert_eq!(table.get("a"), Some("1"));
        assert_eq!(table.get("b"), None);
    }

    #[test]
    fn test_require_missing_key_is_an_error() {
        let table = scan_str("a=1\n", Delimiter::Char('='), Malformed::Skip, None);
        let err = table.require("MemTotal").unwrap_err();
        assert!(err.to_string().contains("MemTotal"));
    }

    #[test]
    fn test_scan_from_a_real_file() {
        use std::fs::File;
        use std::io::{BufReader, Write};

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "PRETTY_NAME=\"Debian GNU/Linux 12\"\nID=debian\n").unwrap();

        let reader = BufReader::new(File::open(file.path()).unwrap());
        let table = scan(
            reader,
            "os-release",
            Delimiter::Char('='),
            Malformed::Skip,
            None,
        )
        .unwrap();
        assert_eq!(table.get("PRETTY_NAME"), Some("\"Debian GNU/Linux 12\""));
        assert_eq!(table.get("ID"), Some("debian"));
    }

    #[test]
    fn test_require_u64_rejects_non_numeric() {
        let table = scan_str("count=abc\n", Delimiter::Char('='), Malformed::Skip, None);
        assert!(table.require_u64("count").is_err());
    }
}
