// patterns.rs - Named seed patterns and random fills

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::GridError;
use crate::grid::Snapshot;

/// A named seed pattern. Coordinates are `(row, col)` from the pattern's top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Case-insensitive lookup by name.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Height and width of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Generation 0 of a `rows` x `cols` grid holding only this pattern, its
    /// top-left corner at `origin`. Cells that fall off the grid are dropped.
    pub fn stamp(&self, rows: usize, cols: usize, origin: (usize, usize)) -> Result<Snapshot, GridError> {
        let len = rows.checked_mul(cols).ok_or(GridError::TooLarge { rows, cols })?;
        let mut cells = vec![false; len];
        for &(r, c) in self.cells {
            let (row, col) = (r.saturating_add(origin.0), c.saturating_add(origin.1));
            if row < rows && col < cols {
                cells[row * cols + col] = true;
            }
        }
        Snapshot::new(0, rows, cols, cells)
    }

    /// Like [`Pattern::stamp`], with the bounding box centered on the grid.
    pub fn stamp_centered(&self, rows: usize, cols: usize) -> Result<Snapshot, GridError> {
        let (height, width) = self.extent();
        self.stamp(rows, cols, (rows.saturating_sub(height) / 2, cols.saturating_sub(width) / 2))
    }
}

/// Generation 0 with roughly a third of the cells alive. The same seed gives the same grid.
pub fn random_snapshot(rows: usize, cols: usize, seed_value: u32) -> Result<Snapshot, GridError> {
    let len = rows.checked_mul(cols).ok_or(GridError::TooLarge { rows, cols })?;

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    let cells = (0..len)
        .map(|_| {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            (seed % 3) == 0
        })
        .collect();
    Snapshot::new(0, rows, cols, cells)
}
