//! Error types for the command-line driver.

use std::path::PathBuf;

/// Errors surfaced by any driver command.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The input file is not a valid snapshot.
    #[error("error parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: conway::ParseError,
    },

    /// A stored state or seed could not be turned into a grid.
    #[error("invalid grid: {0}")]
    Grid(#[from] conway::GridError),

    /// The row-concurrent engine lost a row task.
    #[error(transparent)]
    Engine(#[from] conway::EngineError),

    /// Reading or writing a file failed.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The state file is not valid JSON for a stored state.
    #[error("corrupt state file: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// `next` or `show` was run before `load`.
    #[error("no game state found, run `load <FILE>` first")]
    NoState,

    #[error("unknown pattern {0:?}, run `patterns` to list them")]
    UnknownPattern(String),
}
