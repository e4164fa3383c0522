//! Host identity
//!
//! The `user@hostname` header line plus the kernel release string.

use std::env;

use serde::{Deserialize, Serialize};
use sysinfo::System;

use crate::error::{FactError, Result};

/// Who and where this snapshot was taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    pub user: String,
    pub hostname: String,
    /// Kernel release (e.g. "6.8.0-45-generic").
    pub kernel: String,
}

impl HostInfo {
    pub fn detect() -> Result<Self> {
        let user = env::var("USER").map_err(|_| FactError::MissingEnv("USER"))?;
        let hostname = System::host_name().ok_or(FactError::Unavailable { what: "host name" })?;
        let kernel = System::kernel_version().ok_or(FactError::Unavailable {
            what: "kernel release",
        })?;
        tracing::debug!(user = %user, hostname = %hostname, kernel = %kernel, "detected host identity");
        Ok(HostInfo {
            user,
            hostname,
            kernel,
        })
    }

    /// The `user@hostname` banner shown above the field list.
    pub fn header(&self) -> String {
        format!("{}@{}", self.user, self.hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_joins_user_and_host() {
        let host = HostInfo {
            user: "alex".to_string(),
            hostname: "workstation".to_string(),
            kernel: "6.8.0-45-generic".to_string(),
        };
        assert_eq!(host.header(), "alex@workstation");
    }
}
