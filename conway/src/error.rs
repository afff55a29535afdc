//! Error types for the grid, parser and engine.
//!
//! Every validation failure is returned as a value carrying enough context
//! (line index, expected vs. actual) for a caller to render a precise message.

use tokio::task::JoinError;

/// Why a text snapshot was rejected by [`crate::parse`].
///
/// `line` fields are 0-based indices into the grid lines (the lines after the
/// dimensions line). Messages number grid lines from 1.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input must have at least 3 lines")]
    TooFewLines,

    #[error("first line must be in format 'Generation N:'")]
    MalformedHeaderLine,

    #[error("second line must be in format 'R C' (rows and columns)")]
    MalformedDimensionsLine,

    #[error("input must have {expected} grid lines after the dimensions line")]
    InsufficientGridLines { expected: usize },

    #[error("grid line {} has {got} characters, expected {expected}", .line + 1)]
    WrongLineLength { line: usize, got: usize, expected: usize },

    #[error("grid line {} contains invalid characters, only '*' and '.' are allowed", .line + 1)]
    InvalidCharacter { line: usize },
}

/// Why a cell matrix could not become a [`crate::Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("grid of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("grid has {got} cells, expected {expected}")]
    CellCount { got: usize, expected: usize },

    #[error("grid has {got} rows, expected {expected}")]
    RowCount { got: usize, expected: usize },

    #[error("grid has {got} columns, expected {expected}")]
    ColCount { got: usize, expected: usize },

    #[error("grid row {row} has {got} cells, expected {expected}")]
    Ragged { row: usize, got: usize, expected: usize },

    #[error("grid row {row} contains a character other than '*' or '.'")]
    InvalidCharacter { row: usize },

    /// Generation `u64::MAX` has no successor, so it is not accepted as input.
    #[error("generation {generation} cannot be advanced")]
    GenerationLimit { generation: u64 },
}

/// Failure of the row-concurrent engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The input is already at the last representable generation.
    #[error("generation {generation} cannot be advanced")]
    GenerationOverflow { generation: u64 },

    /// A row task panicked or was cancelled before returning its row.
    #[error("row {row} task failed: {source}")]
    RowTask {
        row: usize,
        #[source]
        source: JoinError,
    },
}
