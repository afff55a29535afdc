// engine.rs - Generation engine: B3/S23 on a finite, non-wrapping grid

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::error::EngineError;
use crate::grid::Snapshot;

/// Relative positions of the eight Moore neighbors.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Counts live neighbors of `(row, col)`. Positions off the grid count as dead.
pub fn count_alive_neighbors(grid: &Snapshot, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if grid.is_alive(nr, nc) {
            count += 1;
        }
    }
    count
}

/// Conway's rules for a single cell.
pub fn next_cell_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

fn next_generation_number(grid: &Snapshot) -> Result<u64, EngineError> {
    grid.generation()
        .checked_add(1)
        .ok_or(EngineError::GenerationOverflow { generation: grid.generation() })
}

fn next_row(grid: &Snapshot, row: usize) -> Vec<bool> {
    (0..grid.cols())
        .map(|col| next_cell_state(grid.is_alive(row, col), count_alive_neighbors(grid, row, col)))
        .collect()
}

/// Computes the next generation. Every cell reads from the unmodified input,
/// so the result does not depend on evaluation order.
///
/// # Panics
///
/// If `grid` is at generation `u64::MAX`. [`crate::parse`] and stored-state
/// restore never produce such a snapshot.
pub fn advance(grid: &Snapshot) -> Snapshot {
    let generation = match next_generation_number(grid) {
        Ok(generation) => generation,
        Err(e) => panic!("{e}"),
    };
    let mut cells = Vec::with_capacity(grid.rows() * grid.cols());
    for row in 0..grid.rows() {
        cells.extend(next_row(grid, row));
    }

    let next = assemble(generation, grid, cells);
    trace!(generation, live = next.live_count(), "advanced generation");
    next
}

/// Row coroutine: computes one row of the next generation, yielding between cells.
async fn process_row(row_index: usize, grid: Arc<Snapshot>) -> (usize, Vec<bool>) {
    let mut row_result = Vec::with_capacity(grid.cols());
    for col in 0..grid.cols() {
        let count = count_alive_neighbors(&grid, row_index, col);
        row_result.push(next_cell_state(grid.is_alive(row_index, col), count));

        tokio::task::yield_now().await;  // Cooperative yielding
    }
    (row_index, row_result)  // Return (row_id, completed_row)
}

/// Same result as [`advance`], computed by one spawned task per row.
/// Generation overflow is reported instead of panicking.
///
/// Must be called from within a tokio runtime.
pub async fn advance_concurrent(grid: Arc<Snapshot>) -> Result<Snapshot, EngineError> {
    let generation = next_generation_number(&grid)?;

    let mut handles = Vec::with_capacity(grid.rows());
    for row in 0..grid.rows() {
        handles.push((row, tokio::spawn(process_row(row, Arc::clone(&grid)))));
    }

    let rows = join_rows(handles).await?;
    let next = assemble(generation, &grid, rows.concat());
    debug!(generation, rows = grid.rows(), live = next.live_count(), "advanced generation by rows");
    Ok(next)
}

/// Collects spawned rows back into row order.
async fn join_rows(handles: Vec<(usize, JoinHandle<(usize, Vec<bool>)>)>) -> Result<Vec<Vec<bool>>, EngineError> {
    let mut rows: Vec<Vec<bool>> = vec![Vec::new(); handles.len()];
    for (row, handle) in handles {
        let (row_index, completed_row) = handle
            .await
            .map_err(|source| EngineError::RowTask { row, source })?;
        rows[row_index] = completed_row;
    }
    Ok(rows)
}

fn assemble(generation: u64, prior: &Snapshot, cells: Vec<bool>) -> Snapshot {
    // Same dimensions as a valid snapshot, one cell computed per position.
    match Snapshot::new(generation, prior.rows(), prior.cols(), cells) {
        Ok(next) => next,
        Err(e) => panic!("engine produced a malformed grid: {e}"),
    }
}
