//! Conway's Game of Life on a finite, flat grid.
//!
//! [`parse`] turns the text format into a validated [`Snapshot`]; [`advance`]
//! derives the next generation. Both are pure: the caller owns whichever
//! snapshot is "current".
//!
//! ```
//! let blinker = conway::parse("Generation 0:\n3 3\n...\n***\n...").unwrap();
//! let next = conway::advance(&blinker);
//! assert_eq!(next.generation(), 1);
//! assert_eq!(next.to_text(), ".*.\n.*.\n.*.");
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod history;
pub mod parse;
pub mod patterns;

pub use engine::{advance, advance_concurrent, count_alive_neighbors, next_cell_state};
pub use error::{EngineError, GridError, ParseError};
pub use grid::{MAX_GENERATION, Snapshot, StoredState, to_boolean_matrix, to_text};
pub use history::CycleHistory;
pub use parse::parse;
pub use patterns::{PATTERNS, Pattern, find_pattern, random_snapshot};
