//! Point-in-time process metrics.
//!
//! # Responsibilities
//! - Track time since process start
//! - Sample resident and virtual memory of the current process
//! - Report OS and CPU architecture

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, System};
use thiserror::Error;

/// Failure to sample process state.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot determine current process id: {0}")]
    CurrentPid(&'static str),

    #[error("process {0} not found in process table")]
    ProcessNotFound(Pid),
}

/// Monotonic clock anchored at process start.
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    started: Instant,
}

impl ProcessClock {
    /// Anchor the clock at the current instant.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds elapsed since the clock was started.
    pub fn uptime_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// Memory figures in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    /// Resident set size of this process.
    pub rss: u64,
    /// Virtual memory reserved by this process.
    pub virtual_memory: u64,
    /// Total physical memory of the host.
    pub system_total: u64,
    /// Physical memory in use on the host.
    pub system_used: u64,
}

/// Sample memory usage of the current process.
pub fn memory_usage() -> Result<MemoryUsage, SnapshotError> {
    let pid = sysinfo::get_current_pid().map_err(SnapshotError::CurrentPid)?;

    let mut system = System::new();
    system.refresh_process(pid);
    system.refresh_memory();

    let process = system
        .process(pid)
        .ok_or(SnapshotError::ProcessNotFound(pid))?;

    Ok(MemoryUsage {
        rss: process.memory(),
        virtual_memory: process.virtual_memory(),
        system_total: system.total_memory(),
        system_used: system.used_memory(),
    })
}

/// Operating system name (`linux`, `macos`, `windows`, ...).
pub fn platform() -> &'static str {
    std::env::consts::OS
}

/// CPU architecture (`x86_64`, `aarch64`, ...).
pub fn arch() -> &'static str {
    std::env::consts::ARCH
}
