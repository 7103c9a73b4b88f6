/*!
 * Monitoring Types
 * Host statistics data model and fallback values
 */

use crate::core::limits::{
    FALLBACK_CORE_COUNT, FALLBACK_DISK_FREE, FALLBACK_DISK_PERCENT, FALLBACK_DISK_TOTAL,
    FALLBACK_DISK_USED, FALLBACK_LOGICAL_CPUS, FALLBACK_MEMORY_AVAILABLE, FALLBACK_MEMORY_TOTAL,
    FALLBACK_MEMORY_USED,
};
use serde::{Deserialize, Serialize};

/// Host virtual-memory figures, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HostMemoryStats {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub buffers: u64,
    pub cached: u64,
}

impl HostMemoryStats {
    /// Documented fallback: 8 GiB total, half used, no buffer/cache detail
    pub fn fallback() -> Self {
        Self {
            total: FALLBACK_MEMORY_TOTAL,
            used: FALLBACK_MEMORY_USED,
            available: FALLBACK_MEMORY_AVAILABLE,
            buffers: 0,
            cached: 0,
        }
    }
}

/// Host swap figures, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SwapStats {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

impl SwapStats {
    /// Documented fallback: no swap configured
    pub fn fallback() -> Self {
        Self {
            total: 0,
            used: 0,
            free: 0,
        }
    }
}

/// Host and CPU details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SystemInfo {
    pub os_name: String,
    pub architecture: String,
    pub processor: String,
    pub core_count: usize,
    pub logical_cpu_count: usize,
    pub cpu_usage_percent: f64,
}

impl SystemInfo {
    /// Documented fallback: compile-time OS/arch, 4 cores / 8 logical CPUs,
    /// idle CPU
    pub fn fallback() -> Self {
        Self {
            os_name: std::env::consts::OS.to_string(),
            architecture: std::env::consts::ARCH.to_string(),
            processor: "unknown".to_string(),
            core_count: FALLBACK_CORE_COUNT,
            logical_cpu_count: FALLBACK_LOGICAL_CPUS,
            cpu_usage_percent: 0.0,
        }
    }
}

/// One entry of the host process list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSample {
    pub pid: u32,
    pub name: String,
    pub memory_mb: f64,
    pub cpu_percent: f64,
}

/// Disk usage for one volume, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

impl DiskUsage {
    /// Documented fallback: a 500 GiB volume at 40% use
    pub fn fallback() -> Self {
        Self {
            total: FALLBACK_DISK_TOTAL,
            used: FALLBACK_DISK_USED,
            free: FALLBACK_DISK_FREE,
            percent: FALLBACK_DISK_PERCENT,
        }
    }
}

/// Format a byte count as a human-readable string with one decimal
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} PB", value)
}
