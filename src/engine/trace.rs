/*!
 * Decision Trace
 * Per-request record of block evaluations for the presentation layer
 */

use crate::core::types::{BlockIndex, Size};
use serde::{Deserialize, Serialize};

/// Ordered, append-only sequence of events for one request
///
/// Produced and returned per request; the engine never stores it. The
/// presentation layer consumes it at its own pace - events carry no
/// timestamps.
pub type DecisionTrace = Vec<TraceEvent>;

/// One step of a request's evaluation
///
/// Per-block events (`Examining`, `Rejected`, `Selected`) appear in the
/// order blocks were evaluated; exactly one terminal event (`Allocated`,
/// `Paged`, or `Failed`) closes the trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A block is being evaluated against the request
    Examining {
        block: BlockIndex,
        free: Size,
        requested: Size,
    },
    /// The block's free capacity cannot cover the request
    Rejected {
        block: BlockIndex,
        free: Size,
        requested: Size,
    },
    /// The algorithm chose this block
    Selected { block: BlockIndex, free: Size },
    /// Terminal: the request was applied to the chosen block
    Allocated { block: BlockIndex, size: Size },
    /// Terminal: the request was admitted by the paging stand-in
    Paged { size: Size },
    /// Terminal: no block fits; nothing was mutated
    Failed { requested: Size },
}

impl TraceEvent {
    /// Whether this event closes a trace
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TraceEvent::Allocated { .. } | TraceEvent::Paged { .. } | TraceEvent::Failed { .. }
        )
    }
}
