/*!
 * Memsim Library
 * Fixed-partition memory allocation simulator exposed as a library
 */

pub mod block;
pub mod core;
pub mod engine;
pub mod monitoring;
pub mod placement;

// Re-exports
pub use block::{analyze_fragmentation, Block, BlockStore, FragmentationSnapshot};
pub use engine::{
    AllocationEngine, AllocationReport, BlockView, DecisionTrace, EngineError, EngineResult,
    EngineSnapshot, ProcessRecord, ReleaseReport, TraceEvent,
};
pub use monitoring::{
    format_bytes, DiskUsage, HostMemoryStats, HostMonitor, ProcessSample, StaticMonitor, SwapStats,
    SystemInfo,
};
pub use placement::{Algorithm, Placement};
