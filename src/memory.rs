//! Process memory sampling for the `memory_usage` metric.
//!
//! The value is the change in resident set size of the whole process across
//! the analysis call. It is a coarse diagnostic: allocator reuse, other
//! threads and page accounting all leak into it, so it may be zero or
//! negative.

use sysinfo::{get_current_pid, Pid, ProcessRefreshKind, ProcessesToUpdate, System};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Source of resident memory readings
pub trait MemoryProbe {
    /// Current resident set size in bytes, `None` when unavailable
    fn resident_bytes(&mut self) -> Option<u64>;
}

/// Reads this process's resident set size through `sysinfo`
pub struct ProcessMemory {
    system: System,
    pid: Option<Pid>,
}

impl ProcessMemory {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            pid: get_current_pid().ok(),
        }
    }
}

impl Default for ProcessMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProbe for ProcessMemory {
    fn resident_bytes(&mut self) -> Option<u64> {
        let pid = self.pid?;
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        self.system.process(pid).map(|process| process.memory())
    }
}

/// Probe for platforms or tests without memory readings
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMemoryProbe;

impl MemoryProbe for NoMemoryProbe {
    fn resident_bytes(&mut self) -> Option<u64> {
        None
    }
}

/// Difference between two readings in megabytes; 0 if either is missing
pub fn delta_mb(before: Option<u64>, after: Option<u64>) -> f64 {
    match (before, after) {
        (Some(before), Some(after)) => (after as f64 - before as f64) / BYTES_PER_MB,
        _ => 0.0,
    }
}
