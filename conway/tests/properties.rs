//! Property tests for the parser and engine.
//!
//! Grids are generated at random and the algebraic laws of the text format
//! and the generation step are checked against them.

use std::sync::Arc;

use conway::{Snapshot, advance, advance_concurrent, count_alive_neighbors, parse, to_boolean_matrix, to_text};
use proptest::prelude::*;

/// Strategy for a rectangular grid of up to 12x12 cells with any generation number.
fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    (1..=12usize, 1..=12usize, 0..u64::MAX / 2).prop_flat_map(|(rows, cols, generation)| {
        prop::collection::vec(any::<bool>(), rows * cols)
            .prop_map(move |cells| Snapshot::new(generation, rows, cols, cells).unwrap())
    })
}

fn header(snapshot: &Snapshot) -> String {
    format!("Generation {}:\n{} {}\n", snapshot.generation(), snapshot.rows(), snapshot.cols())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn parse_inverts_serialization(snapshot in snapshot_strategy()) {
        let text = header(&snapshot) + &to_text(&snapshot.to_matrix());
        prop_assert_eq!(parse(&text), Ok(snapshot));
    }

    #[test]
    fn boolean_matrix_inverts_text(snapshot in snapshot_strategy()) {
        prop_assert_eq!(to_boolean_matrix(&snapshot.to_text()), snapshot.to_matrix());
    }

    #[test]
    fn advance_is_deterministic(snapshot in snapshot_strategy()) {
        prop_assert_eq!(advance(&snapshot), advance(&snapshot));
    }

    #[test]
    fn advance_preserves_shape_and_counts_generations(snapshot in snapshot_strategy()) {
        let next = advance(&snapshot);
        prop_assert_eq!(next.generation(), snapshot.generation() + 1);
        prop_assert_eq!(next.rows(), snapshot.rows());
        prop_assert_eq!(next.cols(), snapshot.cols());
    }

    #[test]
    fn neighbor_count_is_bounded_by_position(snapshot in snapshot_strategy()) {
        let (rows, cols) = (snapshot.rows(), snapshot.cols());
        for row in 0..rows {
            for col in 0..cols {
                let vertical = 1 + usize::from(row > 0) + usize::from(row + 1 < rows);
                let horizontal = 1 + usize::from(col > 0) + usize::from(col + 1 < cols);
                let candidates = vertical * horizontal - 1;
                prop_assert!(usize::from(count_alive_neighbors(&snapshot, row, col)) <= candidates);
            }
        }
    }

    #[test]
    fn dead_grids_stay_dead(rows in 1..=20usize, cols in 1..=20usize) {
        let dead = Snapshot::dead(0, rows, cols).unwrap();
        prop_assert_eq!(advance(&dead).live_count(), 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn concurrent_engine_agrees(snapshot in snapshot_strategy()) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let concurrent = runtime.block_on(advance_concurrent(Arc::new(snapshot.clone()))).unwrap();
        prop_assert_eq!(concurrent, advance(&snapshot));
    }
}

#[test]
fn full_grid_neighbor_counts_reach_the_bounds() {
    let full = Snapshot::new(0, 4, 5, vec![true; 20]).unwrap();
    assert_eq!(count_alive_neighbors(&full, 0, 0), 3);
    assert_eq!(count_alive_neighbors(&full, 0, 4), 3);
    assert_eq!(count_alive_neighbors(&full, 3, 2), 5);
    assert_eq!(count_alive_neighbors(&full, 2, 4), 5);
    assert_eq!(count_alive_neighbors(&full, 2, 2), 8);
}
