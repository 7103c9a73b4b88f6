/*!
 * Engine Property Tests
 * Capacity conservation under arbitrary operation sequences
 */

use memsim::{Algorithm, AllocationEngine, Placement};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Allocate {
        name: &'static str,
        size: usize,
        algorithm: Algorithm,
    },
    Release {
        name: &'static str,
    },
    Reset,
}

const NAMES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::FirstFit),
        Just(Algorithm::BestFit),
        Just(Algorithm::WorstFit),
        Just(Algorithm::Paging),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NAMES.len(), 1usize..700, algorithm_strategy()).prop_map(
            |(name, size, algorithm)| Op::Allocate {
                name: NAMES[name],
                size,
                algorithm,
            }
        ),
        (0..NAMES.len()).prop_map(|name| Op::Release { name: NAMES[name] }),
        Just(Op::Reset),
    ]
}

fn assert_invariants(engine: &AllocationEngine) {
    let snapshot = engine.snapshot();
    for view in &snapshot.blocks {
        let charged: usize = snapshot
            .processes
            .iter()
            .filter(|record| record.placement == Placement::Block(view.index))
            .map(|record| record.size)
            .sum();
        assert_eq!(view.free + charged, view.total);
        assert!(view.free <= view.total);
    }
}

proptest! {
    #[test]
    fn conservation_holds_for_any_operation_sequence(
        ops in proptest::collection::vec(op_strategy(), 1..60)
    ) {
        let engine = AllocationEngine::new();
        for op in ops {
            match op {
                Op::Allocate { name, size, algorithm } => {
                    // Rejections (duplicate, no fit) are legitimate outcomes;
                    // the invariant must hold either way.
                    let _ = engine.request_allocation(name, size, algorithm);
                }
                Op::Release { name } => {
                    let _ = engine.release(name);
                }
                Op::Reset => {
                    engine.reset().unwrap();
                }
            }
            assert_invariants(&engine);
        }
    }

    #[test]
    fn release_after_allocate_restores_free_capacity(
        size in 1usize..600,
        algorithm in algorithm_strategy()
    ) {
        let engine = AllocationEngine::new();
        let before = engine.blocks();
        if engine.request_allocation("p", size, algorithm).is_ok() {
            engine.release("p").unwrap();
            prop_assert_eq!(engine.blocks(), before);
            prop_assert!(engine.processes().is_empty());
        }
    }
}
