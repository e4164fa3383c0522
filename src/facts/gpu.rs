//! GPU reader
//!
//! Scans `lspci` output for the VGA controller line and pulls out the
//! vendor/model description. A machine with no VGA device is a normal
//! outcome, not an error; only a failure to spawn `lspci` is fatal.

use crate::error::Result;
use crate::exec;

/// Detect the primary GPU, or `None` if no VGA device is listed.
pub fn detect() -> Result<Option<String>> {
    let stdout = exec::capture_stdout("lspci")?;
    let gpu = from_lspci(&stdout);
    match &gpu {
        Some(model) => tracing::debug!(model = %model, "detected gpu"),
        None => tracing::debug!("no vga device in lspci output"),
    }
    Ok(gpu)
}

pub(crate) fn from_lspci(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains("VGA"))
        .and_then(parse_vga_line)
}

/// Extract the device description from an lspci VGA line.
///
/// Format: `00:02.0 VGA compatible controller: Intel Corporation UHD Graphics (rev 02)`.
/// The bus-address prefix also contains colons, so the class/device
/// separator is the first `:` after byte 8; the trailing `(rev ..)` tag
/// is dropped by cutting just before the last `(`.
fn parse_vga_line(line: &str) -> Option<String> {
    let colon = line.get(8..)?.find(':')? + 8;
    let start = colon + 2;
    let end = match line.rfind('(') {
        Some(pos) if pos > start => pos - 1,
        _ => line.len(),
    };
    line.get(start..end).map(str::to_string)
}
