/*!
 * Monitoring Traits
 * The adapter interface the presentation layer consumes
 */

use super::types::{DiskUsage, HostMemoryStats, ProcessSample, SwapStats, SystemInfo};
use crate::core::limits::DEFAULT_TOP_PROCESS_LIMIT;
use std::path::Path;

/// Host statistics source
///
/// Implementations must never fail: any unavailable or unparsable source
/// degrades to the documented fallback value for that call.
pub trait HostMonitor: Send + Sync {
    /// Virtual-memory figures; falls back to `HostMemoryStats::fallback()`
    fn memory_stats(&self) -> HostMemoryStats;

    /// Swap figures; falls back to `SwapStats::fallback()`
    fn swap_stats(&self) -> SwapStats;

    /// OS and CPU details; unavailable fields fall back per
    /// `SystemInfo::fallback()`
    fn system_info(&self) -> SystemInfo;

    /// Up to `limit` processes, sorted descending by resident memory;
    /// falls back to an empty list
    fn top_processes(&self, limit: usize) -> Vec<ProcessSample>;

    /// `top_processes` with the default display limit
    fn top_processes_default(&self) -> Vec<ProcessSample> {
        self.top_processes(DEFAULT_TOP_PROCESS_LIMIT)
    }

    /// Usage of the volume containing `path`; falls back to
    /// `DiskUsage::fallback()`
    fn disk_usage(&self, path: &Path) -> DiskUsage;
}
