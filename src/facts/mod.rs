//! Host fact collection
//!
//! One reader per source: os-release, meminfo, cpuinfo, statvfs,
//! sysinfo(2), lspci, plus the host identity queries. Each reader owns
//! its own field table and file handle and drops them before the next
//! reader runs.

pub mod cpu;
pub mod disk;
pub mod fields;
pub mod gpu;
pub mod host;
pub mod memory;
pub mod os;
mod snapshot;
pub mod uptime;

pub use snapshot::Snapshot;
