/*!
 * Allocation Engine
 *
 * Stateful orchestrator for the simulation: owns the block store and the
 * allocated process records, runs one placement algorithm per request, and
 * emits a decision trace for the presentation layer.
 *
 * ## Concurrency
 *
 * At most one mutation (allocation, release, reset) is in flight at a time.
 * Mutations `try`-acquire the write half of a single `RwLock` and fail with
 * `EngineBusy` instead of queuing; reads go through the same lock, so they
 * never observe a half-applied mutation. State is applied atomically at the
 * terminal trace event - trace construction itself touches no shared state,
 * and there is no pacing anywhere in the engine.
 */

mod trace;
mod types;

pub use trace::{DecisionTrace, TraceEvent};
pub use types::{
    AllocationReport, BlockView, EngineError, EngineResult, EngineSnapshot, ProcessRecord,
    ReleaseReport,
};

use crate::block::{analyze_fragmentation, BlockStore, FragmentationSnapshot};
use crate::core::limits::DEFAULT_BLOCK_CAPACITIES;
use crate::core::types::Size;
use crate::placement::{self, Algorithm, Placement};
use log::{info, warn};
use parking_lot::RwLock;

struct EngineState {
    store: BlockStore,
    records: Vec<ProcessRecord>,
}

/// Allocation simulation engine
pub struct AllocationEngine {
    state: RwLock<EngineState>,
}

impl AllocationEngine {
    /// Engine over the reference block topology (500, 200, 300, 600)
    pub fn new() -> Self {
        Self::with_blocks(&DEFAULT_BLOCK_CAPACITIES)
    }

    /// Engine over a custom block topology, fixed for the engine's lifetime
    pub fn with_blocks(capacities: &[Size]) -> Self {
        let store = BlockStore::new(capacities);
        info!(
            "allocation engine initialized with {} blocks ({} units total)",
            store.len(),
            store.iter().map(|block| block.total()).sum::<Size>()
        );
        Self {
            state: RwLock::new(EngineState {
                store,
                records: Vec::new(),
            }),
        }
    }

    /// Admit a process, tracing every block evaluation
    ///
    /// Inputs are validated before any state access; a duplicate live name is
    /// rejected under the lock. On `NoFittingBlock` the store is untouched and
    /// the error carries the full trace. Paging always succeeds and records
    /// the process against the sentinel, charging no block.
    pub fn request_allocation(
        &self,
        name: &str,
        size: Size,
        algorithm: Algorithm,
    ) -> EngineResult<AllocationReport> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidInput(
                "process name must be non-empty".into(),
            ));
        }
        if size == 0 {
            return Err(EngineError::InvalidInput(
                "requested size must be positive".into(),
            ));
        }

        let mut state = self.state.try_write().ok_or(EngineError::EngineBusy)?;
        if state.records.iter().any(|record| record.name == name) {
            return Err(EngineError::DuplicateProcess(name.to_string()));
        }

        let free = state.store.free_snapshot();
        match placement::place(algorithm, &free, size) {
            Some(Placement::Paged) => {
                state.records.push(ProcessRecord {
                    name: name.to_string(),
                    size,
                    placement: Placement::Paged,
                });
                info!("paged {} units for '{}' (no block charged)", size, name);
                Ok(AllocationReport {
                    process: name.to_string(),
                    size,
                    placement: Placement::Paged,
                    trace: vec![TraceEvent::Paged { size }],
                })
            }
            Some(Placement::Block(chosen)) => {
                let trace = Self::success_trace(algorithm, &free, size, chosen);
                state.store.charge(chosen, size);
                state.records.push(ProcessRecord {
                    name: name.to_string(),
                    size,
                    placement: Placement::Block(chosen),
                });
                info!(
                    "allocated {} units for '{}' in block {} via {}",
                    size,
                    name,
                    chosen,
                    algorithm.as_str()
                );
                Ok(AllocationReport {
                    process: name.to_string(),
                    size,
                    placement: Placement::Block(chosen),
                    trace,
                })
            }
            None => {
                let mut trace = DecisionTrace::with_capacity(free.len() * 2 + 1);
                for (index, &capacity) in free.iter().enumerate() {
                    trace.push(TraceEvent::Examining {
                        block: index,
                        free: capacity,
                        requested: size,
                    });
                    trace.push(TraceEvent::Rejected {
                        block: index,
                        free: capacity,
                        requested: size,
                    });
                }
                trace.push(TraceEvent::Failed { requested: size });
                warn!(
                    "no block fits {} units for '{}' via {}",
                    size,
                    name,
                    algorithm.as_str()
                );
                Err(EngineError::NoFittingBlock {
                    requested: size,
                    trace,
                })
            }
        }
    }

    /// Release a process and return its capacity to the freed block
    ///
    /// Lookup is by exact name; duplicates are prevented at admission, so the
    /// first match in insertion order is the only match. Releasing a paged
    /// record only removes the record.
    pub fn release(&self, name: &str) -> EngineResult<ReleaseReport> {
        let mut state = self.state.try_write().ok_or(EngineError::EngineBusy)?;
        let position = state
            .records
            .iter()
            .position(|record| record.name == name)
            .ok_or_else(|| EngineError::NotFound(name.to_string()))?;

        let record = state.records.remove(position);
        if let Placement::Block(index) = record.placement {
            state.store.credit(index, record.size);
        }
        info!("released {} units held by '{}'", record.size, record.name);
        Ok(ReleaseReport {
            process: record.name,
            size: record.size,
            placement: record.placement,
        })
    }

    /// Restore every block to full capacity and drop all records
    ///
    /// Idempotent; rejected with `EngineBusy` while a mutation is in flight.
    pub fn reset(&self) -> EngineResult<()> {
        let mut state = self.state.try_write().ok_or(EngineError::EngineBusy)?;
        state.store.reset();
        state.records.clear();
        info!("simulation reset, all blocks restored to full capacity");
        Ok(())
    }

    /// Fragmentation figures for the current free capacities
    pub fn fragmentation_snapshot(&self) -> FragmentationSnapshot {
        let state = self.state.read();
        analyze_fragmentation(&state.store.free_snapshot())
    }

    /// Per-block view for display, in index order
    pub fn blocks(&self) -> Vec<BlockView> {
        let state = self.state.read();
        state
            .store
            .iter()
            .enumerate()
            .map(|(index, block)| BlockView {
                index,
                total: block.total(),
                free: block.free(),
                used: block.used(),
            })
            .collect()
    }

    /// Currently allocated processes, in insertion order
    pub fn processes(&self) -> Vec<ProcessRecord> {
        self.state.read().records.clone()
    }

    /// Blocks and records together, under one lock acquisition
    ///
    /// Use this when the two must reconcile (e.g. checking capacity
    /// conservation while mutations are running elsewhere).
    pub fn snapshot(&self) -> EngineSnapshot {
        let state = self.state.read();
        EngineSnapshot {
            blocks: state
                .store
                .iter()
                .enumerate()
                .map(|(index, block)| BlockView {
                    index,
                    total: block.total(),
                    free: block.free(),
                    used: block.used(),
                })
                .collect(),
            processes: state.records.clone(),
        }
    }

    /// Trace of the evaluation walk that led to `chosen`
    ///
    /// First-Fit stops scanning at its selection; Best/Worst-Fit examine every
    /// block before the extremal rule picks one, and the trace reflects that.
    fn success_trace(
        algorithm: Algorithm,
        free: &[Size],
        requested: Size,
        chosen: usize,
    ) -> DecisionTrace {
        let mut trace = DecisionTrace::new();
        let first_fit_scan = algorithm == Algorithm::FirstFit;
        let scan_end = if first_fit_scan { chosen + 1 } else { free.len() };

        for (index, &capacity) in free.iter().enumerate().take(scan_end) {
            trace.push(TraceEvent::Examining {
                block: index,
                free: capacity,
                requested,
            });
            if first_fit_scan && index == chosen {
                trace.push(TraceEvent::Selected {
                    block: index,
                    free: capacity,
                });
            } else if capacity < requested {
                trace.push(TraceEvent::Rejected {
                    block: index,
                    free: capacity,
                    requested,
                });
            }
        }
        if !first_fit_scan {
            trace.push(TraceEvent::Selected {
                block: chosen,
                free: free[chosen],
            });
        }
        trace.push(TraceEvent::Allocated {
            block: chosen,
            size: requested,
        });
        trace
    }
}

impl Default for AllocationEngine {
    fn default() -> Self {
        Self::new()
    }
}
