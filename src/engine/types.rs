/*!
 * Engine Types
 * Records, reports, views, and the error taxonomy
 */

use super::trace::DecisionTrace;
use crate::core::types::{BlockIndex, Size};
use crate::placement::Placement;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine operation result
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine errors
///
/// All variants are recoverable, caller-visible outcomes; none terminate the
/// process. Invariant violations (negative free capacity and the like) are
/// defects guarded by assertions, not error variants.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("process '{0}' is already allocated")]
    DuplicateProcess(String),

    #[error("process '{0}' not found")]
    NotFound(String),

    #[error("no block can fit {requested} units")]
    NoFittingBlock {
        requested: Size,
        /// The full evaluation walk, so the caller can still render why
        /// every block was rejected. The block store was not mutated.
        trace: DecisionTrace,
    },

    #[error("another allocation or release is in flight, retry")]
    EngineBusy,
}

/// A currently allocated process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub name: String,
    pub size: Size,
    pub placement: Placement,
}

/// Outcome of a successful allocation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub process: String,
    pub size: Size,
    pub placement: Placement,
    pub trace: DecisionTrace,
}

/// Outcome of a successful release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseReport {
    pub process: String,
    pub size: Size,
    pub placement: Placement,
}

/// Point-in-time view of one block, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockView {
    pub index: BlockIndex,
    pub total: Size,
    pub free: Size,
    pub used: Size,
}

/// Consistent view of blocks and records, taken under a single lock
/// acquisition so the two always reconcile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub blocks: Vec<BlockView>,
    pub processes: Vec<ProcessRecord>,
}
