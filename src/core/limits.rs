/*!
 * Simulator Limits and Constants
 *
 * Centralized location for fixed configuration values, display caps, and
 * monitoring fallback values. Grouped by domain.
 */

use super::types::Size;

// =============================================================================
// BLOCK TOPOLOGY
// =============================================================================

/// Reference block topology: four fixed partitions
/// Block count and per-block capacity never change after engine construction
pub const DEFAULT_BLOCK_CAPACITIES: [Size; 4] = [500, 200, 300, 600];

// =============================================================================
// MONITORING
// =============================================================================

const GIB: u64 = 1024 * 1024 * 1024;

/// Default number of entries returned by `top_processes`
pub const DEFAULT_TOP_PROCESS_LIMIT: usize = 10;

/// Display cap for process names in monitor samples
pub const PROCESS_NAME_DISPLAY_MAX: usize = 25;

/// Display cap for the processor model string
pub const PROCESSOR_NAME_DISPLAY_MAX: usize = 30;

/// Fallback host memory figures (8 GiB total, half used) reported when the
/// platform source is unavailable or unparsable
pub const FALLBACK_MEMORY_TOTAL: u64 = 8 * GIB;
pub const FALLBACK_MEMORY_USED: u64 = 4 * GIB;
pub const FALLBACK_MEMORY_AVAILABLE: u64 = 4 * GIB;

/// Fallback CPU topology reported when `/proc` is unavailable
pub const FALLBACK_CORE_COUNT: usize = 4;
pub const FALLBACK_LOGICAL_CPUS: usize = 8;

/// Fallback disk figures (500 GiB volume at 40% use)
pub const FALLBACK_DISK_TOTAL: u64 = 500 * GIB;
pub const FALLBACK_DISK_USED: u64 = 200 * GIB;
pub const FALLBACK_DISK_FREE: u64 = 300 * GIB;
pub const FALLBACK_DISK_PERCENT: f64 = 40.0;
