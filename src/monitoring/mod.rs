/*!
 * Host Monitoring
 *
 * Adapter boundary for host statistics consumed by the presentation layer.
 * Every implementation degrades to documented fallback values instead of
 * propagating failures; the allocation engine never depends on monitoring
 * being available.
 */

mod host;
mod tracer;
mod traits;
mod types;

#[cfg(target_os = "linux")]
pub use host::ProcfsMonitor;
pub use host::StaticMonitor;
pub use tracer::init_tracing;
pub use traits::HostMonitor;
pub use types::{format_bytes, DiskUsage, HostMemoryStats, ProcessSample, SwapStats, SystemInfo};
