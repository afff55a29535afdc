// history.rs - Recent grid hashes for spotting still lifes and oscillators

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Snapshot;

pub const DEFAULT_HISTORY_LEN: usize = 10;

/// Hash of the cells only; two generations of an oscillator hash equal.
pub fn hash_grid(grid: &Snapshot) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.rows().hash(&mut hasher);
    grid.cols().hash(&mut hasher);
    for row in grid.iter_rows() {
        row.hash(&mut hasher);
    }
    hasher.finish()
}

/// Ring of recent grid hashes used to stop a run once the grid repeats.
#[derive(Debug, Clone)]
pub struct CycleHistory {
    hashes: Vec<u64>,
    capacity: usize,
    count: usize,
}

impl Default for CycleHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN)
    }
}

impl CycleHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { hashes: Vec::with_capacity(capacity), capacity, count: 0 }
    }

    /// Returns `true` if this grid was seen within the last `capacity`
    /// observations, otherwise remembers it.
    pub fn observe(&mut self, grid: &Snapshot) -> bool {
        let current_hash = hash_grid(grid);
        if self.hashes.contains(&current_hash) {
            return true;
        }
        if self.hashes.len() < self.capacity {
            self.hashes.push(current_hash);
        } else {
            self.hashes[self.count % self.capacity] = current_hash;
        }
        self.count += 1;
        false
    }

    pub fn clear(&mut self) {
        self.hashes.clear();
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::advance;
    use crate::patterns::find_pattern;

    #[test]
    fn hash_ignores_generation_number() {
        let a = Snapshot::from_rows(0, &[[true, false]]).unwrap();
        let b = Snapshot::from_rows(9, &[[true, false]]).unwrap();
        assert_eq!(hash_grid(&a), hash_grid(&b));
    }

    #[test]
    fn blinker_repeats_after_two_steps() {
        let mut history = CycleHistory::default();
        let mut grid = find_pattern("Blinker").unwrap().stamp_centered(5, 5).unwrap();
        assert!(!history.observe(&grid));
        grid = advance(&grid);
        assert!(!history.observe(&grid));
        grid = advance(&grid);
        assert!(history.observe(&grid));
    }

    #[test]
    fn oldest_entries_are_forgotten() {
        let grids: Vec<Snapshot> = (0..3usize)
            .map(|i| {
                let mut row = vec![false; 3];
                row[i] = true;
                Snapshot::from_rows(0, &[row]).unwrap()
            })
            .collect();

        let mut history = CycleHistory::new(2);
        assert!(!history.observe(&grids[0]));
        assert!(!history.observe(&grids[1]));
        assert!(!history.observe(&grids[2]));
        // grids[0] was overwritten by grids[2]
        assert!(!history.observe(&grids[0]));
        assert!(history.observe(&grids[0]));
    }

    #[test]
    fn clear_forgets() {
        let grid = Snapshot::dead(0, 2, 2).unwrap();
        let mut history = CycleHistory::new(0);
        assert!(!history.observe(&grid));
        history.clear();
        assert!(!history.observe(&grid));
        assert!(history.observe(&grid));
    }
}
