/*!
 * Allocation Engine Tests
 * Lifecycle, placement outcomes, traces, and the error taxonomy
 */

use memsim::{
    Algorithm, AllocationEngine, EngineError, Placement, ProcessRecord, TraceEvent,
};
use pretty_assertions::assert_eq;

fn conservation_holds(engine: &AllocationEngine) -> bool {
    let records = engine.processes();
    engine.blocks().iter().all(|view| {
        let charged: usize = records
            .iter()
            .filter(|record| record.placement == Placement::Block(view.index))
            .map(|record| record.size)
            .sum();
        view.free + charged == view.total && view.free <= view.total
    })
}

#[test]
fn test_first_fit_determinism() {
    let engine = AllocationEngine::new();
    let report = engine
        .request_allocation("editor", 250, Algorithm::FirstFit)
        .unwrap();
    assert_eq!(report.placement, Placement::Block(0));
    assert_eq!(engine.blocks()[0].free, 250);
}

#[test]
fn test_best_fit_tie_break() {
    let engine = AllocationEngine::with_blocks(&[300, 300, 600]);
    let report = engine
        .request_allocation("editor", 250, Algorithm::BestFit)
        .unwrap();
    assert_eq!(report.placement, Placement::Block(0));
}

#[test]
fn test_worst_fit_selection() {
    let engine = AllocationEngine::new();
    let report = engine
        .request_allocation("editor", 250, Algorithm::WorstFit)
        .unwrap();
    assert_eq!(report.placement, Placement::Block(3));
    assert_eq!(engine.blocks()[3].free, 350);
}

#[test]
fn test_failure_leaves_state_untouched() {
    for algorithm in [Algorithm::FirstFit, Algorithm::BestFit, Algorithm::WorstFit] {
        let engine = AllocationEngine::with_blocks(&[100, 50, 80]);
        let err = engine
            .request_allocation("too-big", 200, algorithm)
            .unwrap_err();
        assert!(matches!(err, EngineError::NoFittingBlock { .. }));
        assert_eq!(
            engine.blocks().iter().map(|view| view.free).collect::<Vec<_>>(),
            vec![100, 50, 80]
        );
        assert!(engine.processes().is_empty());
    }
}

#[test]
fn test_paging_always_succeeds() {
    let engine = AllocationEngine::with_blocks(&[100, 50, 80]);
    let report = engine
        .request_allocation("huge", 10_000, Algorithm::Paging)
        .unwrap();
    assert_eq!(report.placement, Placement::Paged);
    assert_eq!(report.trace, vec![TraceEvent::Paged { size: 10_000 }]);
    // No block is charged by the paging stand-in.
    assert_eq!(
        engine.blocks().iter().map(|view| view.free).collect::<Vec<_>>(),
        vec![100, 50, 80]
    );
    assert_eq!(
        engine.processes(),
        vec![ProcessRecord {
            name: "huge".to_string(),
            size: 10_000,
            placement: Placement::Paged,
        }]
    );
}

#[test]
fn test_round_trip_restores_pre_allocation_state() {
    let engine = AllocationEngine::new();
    let before = engine.blocks();

    engine
        .request_allocation("worker", 150, Algorithm::BestFit)
        .unwrap();
    engine.release("worker").unwrap();

    assert_eq!(engine.blocks(), before);
    assert!(engine.processes().is_empty());
}

#[test]
fn test_release_of_paged_process_leaves_blocks_alone() {
    let engine = AllocationEngine::new();
    engine
        .request_allocation("paged", 5_000, Algorithm::Paging)
        .unwrap();
    let report = engine.release("paged").unwrap();
    assert_eq!(report.placement, Placement::Paged);
    assert_eq!(
        engine.blocks().iter().map(|view| view.free).collect::<Vec<_>>(),
        vec![500, 200, 300, 600]
    );
}

#[test]
fn test_release_unknown_process() {
    let engine = AllocationEngine::new();
    assert_eq!(
        engine.release("ghost"),
        Err(EngineError::NotFound("ghost".to_string()))
    );
}

#[test]
fn test_duplicate_process_is_rejected_without_side_effects() {
    let engine = AllocationEngine::new();
    engine
        .request_allocation("editor", 100, Algorithm::FirstFit)
        .unwrap();
    let err = engine
        .request_allocation("editor", 50, Algorithm::FirstFit)
        .unwrap_err();
    assert_eq!(err, EngineError::DuplicateProcess("editor".to_string()));
    assert_eq!(engine.processes().len(), 1);
    assert_eq!(engine.blocks()[0].free, 400);
}

#[test]
fn test_name_is_free_again_after_release() {
    let engine = AllocationEngine::new();
    engine
        .request_allocation("editor", 100, Algorithm::FirstFit)
        .unwrap();
    engine.release("editor").unwrap();
    assert!(engine
        .request_allocation("editor", 100, Algorithm::FirstFit)
        .is_ok());
}

#[test]
fn test_invalid_input_is_rejected_before_state_access() {
    let engine = AllocationEngine::new();
    assert!(matches!(
        engine.request_allocation("", 100, Algorithm::FirstFit),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        engine.request_allocation("   ", 100, Algorithm::FirstFit),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        engine.request_allocation("editor", 0, Algorithm::FirstFit),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(engine.processes().is_empty());
}

#[test]
fn test_reset_is_idempotent() {
    let engine = AllocationEngine::new();
    engine
        .request_allocation("a", 100, Algorithm::FirstFit)
        .unwrap();
    engine
        .request_allocation("b", 200, Algorithm::WorstFit)
        .unwrap();

    engine.reset().unwrap();
    let after_first = (engine.blocks(), engine.processes());
    engine.reset().unwrap();
    let after_second = (engine.blocks(), engine.processes());

    assert_eq!(after_first, after_second);
    assert!(after_second.1.is_empty());
    assert_eq!(
        after_second.0.iter().map(|view| view.free).collect::<Vec<_>>(),
        vec![500, 200, 300, 600]
    );
}

#[test]
fn test_fragmentation_snapshot_formula() {
    let engine = AllocationEngine::with_blocks(&[50, 50, 50, 300]);
    let snapshot = engine.fragmentation_snapshot();
    assert_eq!(snapshot.total_free, 450);
    assert_eq!(snapshot.largest_free, 300);
    assert_eq!(snapshot.external_fragmentation, 150);
}

#[test]
fn test_fragmentation_tracks_allocations() {
    let engine = AllocationEngine::new();
    engine
        .request_allocation("a", 550, Algorithm::WorstFit)
        .unwrap();
    // Free capacities are now [500, 200, 300, 50].
    let snapshot = engine.fragmentation_snapshot();
    assert_eq!(snapshot.total_free, 1050);
    assert_eq!(snapshot.largest_free, 500);
    assert_eq!(snapshot.external_fragmentation, 550);
}

#[test]
fn test_conservation_across_mixed_operations() {
    let engine = AllocationEngine::new();
    engine.request_allocation("a", 120, Algorithm::FirstFit).unwrap();
    engine.request_allocation("b", 450, Algorithm::BestFit).unwrap();
    engine.request_allocation("c", 70, Algorithm::WorstFit).unwrap();
    engine.request_allocation("d", 9_999, Algorithm::Paging).unwrap();
    assert!(conservation_holds(&engine));

    engine.release("b").unwrap();
    assert!(conservation_holds(&engine));

    let _ = engine.request_allocation("e", 10_000, Algorithm::BestFit);
    assert!(conservation_holds(&engine));

    engine.reset().unwrap();
    assert!(conservation_holds(&engine));
}

#[test]
fn test_trace_serializes_for_the_presentation_layer() {
    let engine = AllocationEngine::new();
    let report = engine
        .request_allocation("editor", 250, Algorithm::FirstFit)
        .unwrap();
    let json = serde_json::to_value(&report.trace).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "event": "examining", "block": 0, "free": 500, "requested": 250 },
            { "event": "selected", "block": 0, "free": 500 },
            { "event": "allocated", "block": 0, "size": 250 },
        ])
    );
}

#[test]
fn test_error_display_messages() {
    assert_eq!(
        EngineError::DuplicateProcess("editor".into()).to_string(),
        "process 'editor' is already allocated"
    );
    assert_eq!(
        EngineError::NotFound("ghost".into()).to_string(),
        "process 'ghost' not found"
    );
    assert_eq!(
        EngineError::NoFittingBlock {
            requested: 999,
            trace: Vec::new()
        }
        .to_string(),
        "no block can fit 999 units"
    );
}
