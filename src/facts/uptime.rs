//! Uptime reader
//!
//! Seconds since boot via `sysinfo(2)`. A failed call is fatal like any
//! other reader; there is no silent zero fallback.

use std::io;
use std::mem::MaybeUninit;

use crate::error::{FactError, Result};

/// Seconds since boot.
pub fn detect() -> Result<u64> {
    let mut info = MaybeUninit::<libc::sysinfo>::uninit();
    let rc = unsafe { libc::sysinfo(info.as_mut_ptr()) };
    if rc != 0 {
        return Err(FactError::Sys {
            call: "sysinfo",
            errno: io::Error::last_os_error().raw_os_error().unwrap_or(0),
        });
    }
    let seconds = unsafe { info.assume_init() }.uptime.max(0) as u64;
    tracing::debug!(seconds, "detected uptime");
    Ok(seconds)
}
