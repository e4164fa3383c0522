//! System snapshot aggregator

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::facts::cpu::CpuInfo;
use crate::facts::disk::DiskInfo;
use crate::facts::host::HostInfo;
use crate::facts::memory::MemoryInfo;
use crate::facts::os::OsInfo;
use crate::facts::{gpu, uptime};

/// Everything one render pass needs, gathered once per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub host: HostInfo,
    pub os: OsInfo,
    pub cpu: CpuInfo,
    pub memory: MemoryInfo,
    pub disk: DiskInfo,
    /// VGA device description, `None` on machines without one.
    pub gpu: Option<String>,
    pub uptime_seconds: u64,
}

impl Snapshot {
    /// Run every reader in sequence. The first failure aborts the whole
    /// collection; the renderer never sees a partial snapshot.
    pub fn collect() -> Result<Self> {
        Ok(Snapshot {
            host: HostInfo::detect()?,
            os: OsInfo::detect()?,
            cpu: CpuInfo::detect()?,
            memory: MemoryInfo::detect()?,
            disk: DiskInfo::detect()?,
            gpu: gpu::detect()?,
            uptime_seconds: uptime::detect()?,
        })
    }
}
