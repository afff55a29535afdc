// grid.rs - Snapshot type and the '*'/'.' text encoding of a grid

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

pub const ALIVE: char = '*';
pub const DEAD: char = '.';

/// A snapshot at this generation has no successor. Input boundaries reject it.
pub const MAX_GENERATION: u64 = u64::MAX;

/// One immutable generation of a finite, flat (non-wrapping) grid.
///
/// Cells are stored row-major in a single buffer. The fields are private so
/// every `Snapshot` in existence has `rows > 0`, `cols > 0` and exactly
/// `rows * cols` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    generation: u64,
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Snapshot {
    /// Builds a snapshot from a row-major cell buffer.
    pub fn new(generation: u64, rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let expected = rows.saturating_mul(cols);
        if cells.len() != expected {
            return Err(GridError::CellCount { got: cells.len(), expected });
        }
        Ok(Self { generation, rows, cols, cells })
    }

    /// Builds a snapshot from a matrix of rows, rejecting ragged input.
    pub fn from_rows<R: AsRef<[bool]>>(generation: u64, matrix: &[R]) -> Result<Self, GridError> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, |row| row.as_ref().len());
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        // Every row is checked before anything is allocated.
        if let Some((row, line)) = matrix.iter().enumerate().find(|(_, line)| line.as_ref().len() != cols) {
            return Err(GridError::Ragged { row, got: line.as_ref().len(), expected: cols });
        }
        let len = rows.checked_mul(cols).ok_or(GridError::TooLarge { rows, cols })?;

        let mut cells = Vec::with_capacity(len);
        for line in matrix {
            cells.extend_from_slice(line.as_ref());
        }
        Ok(Self { generation, rows, cols, cells })
    }

    /// An all-dead grid.
    pub fn dead(generation: u64, rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = rows.checked_mul(cols).ok_or(GridError::TooLarge { rows, cols })?;
        Self::new(generation, rows, cols, vec![false; len])
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `false` for positions outside the grid.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.cols)
    }

    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// The grid lines only, without the header.
    pub fn to_text(&self) -> String {
        to_text(&self.iter_rows().collect::<Vec<_>>())
    }

    pub fn to_stored(&self) -> StoredState {
        StoredState {
            generation_number: self.generation,
            rows: self.rows,
            cols: self.cols,
            state: self.to_text(),
        }
    }
}

/// Renders the full input format, header included.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation {}:", self.generation)?;
        writeln!(f, "{} {}", self.rows, self.cols)?;
        write!(f, "{}", self.to_text())
    }
}

/// The record a caller keeps between requests: header fields plus the grid text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredState {
    pub generation_number: u64,
    pub rows: usize,
    pub cols: usize,
    pub state: String,
}

impl TryFrom<StoredState> for Snapshot {
    type Error = GridError;

    fn try_from(stored: StoredState) -> Result<Self, Self::Error> {
        if stored.generation_number == MAX_GENERATION {
            return Err(GridError::GenerationLimit { generation: stored.generation_number });
        }
        if let Some((row, _)) = stored
            .state
            .split('\n')
            .enumerate()
            .find(|(_, line)| line.chars().any(|c| c != ALIVE && c != DEAD))
        {
            return Err(GridError::InvalidCharacter { row });
        }

        let matrix = to_boolean_matrix(&stored.state);
        if matrix.len() != stored.rows {
            return Err(GridError::RowCount { got: matrix.len(), expected: stored.rows });
        }
        let snapshot = Self::from_rows(stored.generation_number, &matrix)?;
        if snapshot.cols != stored.cols {
            return Err(GridError::ColCount { got: snapshot.cols, expected: stored.cols });
        }
        Ok(snapshot)
    }
}

/// Joins each row's cells into a `*`/`.` line, lines separated by `'\n'`.
pub fn to_text<R: AsRef<[bool]>>(cells: &[R]) -> String {
    let mut out = String::new();
    for (i, row) in cells.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(row.as_ref().iter().map(|&alive| if alive { ALIVE } else { DEAD }));
    }
    out
}

/// Maps grid text back to booleans without any validation.
pub fn to_boolean_matrix(text: &str) -> Vec<Vec<bool>> {
    text.split('\n')
        .map(|line| line.chars().map(|c| c == ALIVE).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_matrix() {
        let matrix = vec![vec![true, false], vec![true]];
        assert_eq!(
            Snapshot::from_rows(0, &matrix),
            Err(GridError::Ragged { row: 1, got: 1, expected: 2 })
        );
    }

    #[test]
    fn empty_grids_are_rejected() {
        let no_rows: Vec<Vec<bool>> = Vec::new();
        assert_eq!(Snapshot::from_rows(0, &no_rows), Err(GridError::Empty));
        assert_eq!(Snapshot::from_rows(0, &[Vec::<bool>::new()]), Err(GridError::Empty));
        assert_eq!(Snapshot::dead(0, 0, 4), Err(GridError::Empty));
    }

    #[test]
    fn new_checks_cell_count() {
        assert_eq!(
            Snapshot::new(0, 2, 2, vec![false; 3]),
            Err(GridError::CellCount { got: 3, expected: 4 })
        );
    }

    #[test]
    fn text_helpers_are_inverse() {
        let text = "..*\n*.*\n***";
        let matrix = to_boolean_matrix(text);
        assert_eq!(matrix[0], vec![false, false, true]);
        assert_eq!(to_text(&matrix), text);
    }

    #[test]
    fn display_renders_header_and_grid() {
        let snapshot = Snapshot::from_rows(7, &[[true, false, false], [false, false, true]]).unwrap();
        assert_eq!(snapshot.to_string(), "Generation 7:\n2 3\n*..\n..*");
    }

    #[test]
    fn accessors_follow_row_major_layout() {
        let snapshot = Snapshot::from_rows(0, &[[false, true], [true, true], [false, false]]).unwrap();
        assert_eq!(snapshot.rows(), 3);
        assert_eq!(snapshot.cols(), 2);
        assert!(snapshot.is_alive(0, 1));
        assert!(!snapshot.is_alive(2, 0));
        assert!(!snapshot.is_alive(3, 0));
        assert_eq!(snapshot.row(1), &[true, true]);
        assert_eq!(snapshot.live_count(), 3);
    }

    #[test]
    fn stored_state_round_trips_through_json() {
        let snapshot = Snapshot::from_rows(4, &[[false, true, false]; 3]).unwrap();
        let json = serde_json::to_string(&snapshot.to_stored()).unwrap();
        assert_eq!(json, r#"{"generation_number":4,"rows":3,"cols":3,"state":".*.\n.*.\n.*."}"#);

        let stored: StoredState = serde_json::from_str(&json).unwrap();
        assert_eq!(Snapshot::try_from(stored), Ok(snapshot));
    }

    #[test]
    fn stored_state_with_bad_shape_is_rejected() {
        let stored = StoredState { generation_number: 0, rows: 3, cols: 2, state: "..\n..".into() };
        assert_eq!(Snapshot::try_from(stored), Err(GridError::RowCount { got: 2, expected: 3 }));

        let stored = StoredState { generation_number: 0, rows: 2, cols: 2, state: "..\n.x".into() };
        assert_eq!(Snapshot::try_from(stored), Err(GridError::InvalidCharacter { row: 1 }));

        let stored = StoredState { generation_number: 0, rows: 2, cols: 3, state: "..\n..".into() };
        assert_eq!(Snapshot::try_from(stored), Err(GridError::ColCount { got: 2, expected: 3 }));

        let stored = StoredState { generation_number: 0, rows: 2, cols: 2, state: "..\n.".into() };
        assert_eq!(
            Snapshot::try_from(stored),
            Err(GridError::Ragged { row: 1, got: 1, expected: 2 })
        );
    }

    #[test]
    fn stored_state_at_last_generation_is_rejected() {
        let stored = StoredState { generation_number: u64::MAX, rows: 1, cols: 1, state: "*".into() };
        assert_eq!(
            Snapshot::try_from(stored),
            Err(GridError::GenerationLimit { generation: u64::MAX })
        );

        let stored = StoredState { generation_number: u64::MAX - 1, rows: 1, cols: 1, state: "*".into() };
        assert_eq!(Snapshot::try_from(stored).map(|s| s.generation()), Ok(u64::MAX - 1));
    }

    #[test]
    fn ragged_matrix_is_rejected_before_allocating() {
        // One long row followed by empty ones: rows * cols is far beyond memory.
        let mut matrix = vec![vec![true; 100_000]];
        matrix.resize(100_000, Vec::new());
        assert_eq!(
            Snapshot::from_rows(0, &matrix),
            Err(GridError::Ragged { row: 1, got: 0, expected: 100_000 })
        );
    }

    #[test]
    fn ragged_stored_state_is_rejected_before_allocating() {
        let state = format!("{}{}", "*".repeat(100_000), "\n".repeat(100_000));
        let stored = StoredState { generation_number: 0, rows: 100_001, cols: 100_000, state };
        assert_eq!(
            Snapshot::try_from(stored),
            Err(GridError::Ragged { row: 1, got: 0, expected: 100_000 })
        );
    }
}
