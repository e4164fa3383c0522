//! Disk space reader
//!
//! Capacity of the root mount via `statvfs(2)`. Figures are decimal
//! gigabytes (10^9 bytes), matching how drives are marketed, not GiB.

use std::ffi::CStr;
use std::io;
use std::mem::MaybeUninit;

use serde::{Deserialize, Serialize};

use crate::error::{FactError, Result};

const ROOT: &CStr = c"/";

const BYTES_PER_GB: f64 = 1_000_000_000.0;

/// Root filesystem capacity in decimal gigabytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DiskInfo {
    /// Space available to unprivileged users.
    pub available_gb: f64,
    pub total_gb: f64,
}

impl DiskInfo {
    pub fn detect() -> Result<Self> {
        let mut stat = MaybeUninit::<libc::statvfs>::uninit();
        let rc = unsafe { libc::statvfs(ROOT.as_ptr(), stat.as_mut_ptr()) };
        if rc != 0 {
            return Err(FactError::Sys {
                call: "statvfs(\"/\")",
                errno: io::Error::last_os_error().raw_os_error().unwrap_or(0),
            });
        }
        let stat = unsafe { stat.assume_init() };

        let fragment = stat.f_frsize as u64;
        let info = Self::from_bytes(stat.f_bavail as u64 * fragment, stat.f_blocks as u64 * fragment);
        tracing::debug!(
            available_gb = info.available_gb,
            total_gb = info.total_gb,
            "detected disk capacity"
        );
        Ok(info)
    }

    pub(crate) fn from_bytes(available: u64, total: u64) -> Self {
        DiskInfo {
            available_gb: available as f64 / BYTES_PER_GB,
            total_gb: total as f64 / BYTES_PER_GB,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_gigabytes() {
        let info = DiskInfo::from_bytes(250_000_000_000, 1_000_000_000_000);
        assert_eq!(info.available_gb, 250.0);
        assert_eq!(info.total_gb, 1000.0);
    }

    #[test]
    fn test_sub_gigabyte_is_fractional() {
        let info = DiskInfo::from_bytes(500_000_000, 500_000_000);
        assert!((info.total_gb - 0.5).abs() < f64::EPSILON);
    }
}
