//! Driver configuration.
//!
//! Loaded from environment variables, each with a default. Command-line flags
//! override the loaded values.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use conway::history::DEFAULT_HISTORY_LEN;

use crate::error::AppError;

/// Complete driver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Where `load`/`next`/`reset`/`show` keep the current generation.
    pub state_file: PathBuf,
    /// Pause between printed generations during `run`.
    pub tick_interval: Duration,
    /// Upper bound on generations advanced by `run`.
    pub max_generations: u64,
    /// How many recent grids `run` remembers when looking for a repeat.
    pub history_len: usize,
    /// Grid height for pattern and random seeds.
    pub grid_rows: usize,
    /// Grid width for pattern and random seeds.
    pub grid_cols: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from("conway-state.json"),
            tick_interval: Duration::from_millis(200),
            max_generations: 100,
            history_len: DEFAULT_HISTORY_LEN,
            grid_rows: 50,
            grid_cols: 50,
        }
    }
}

impl DriverConfig {
    /// Load configuration from environment variables.
    ///
    /// - `CONWAY_STATE_FILE` -- state file path (default `conway-state.json`)
    /// - `CONWAY_TICK_INTERVAL_MS` -- delay between generations in `run` (default 200)
    /// - `CONWAY_MAX_GENERATIONS` -- generations advanced by `run` (default 100)
    /// - `CONWAY_HISTORY_LEN` -- grids remembered for repeat detection (default 10)
    /// - `CONWAY_GRID_ROWS` / `CONWAY_GRID_COLS` -- seed grid size (default 50x50)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let state_file = lookup("CONWAY_STATE_FILE").map_or(defaults.state_file, PathBuf::from);
        let tick_interval_ms: u64 = parse_var(&lookup, "CONWAY_TICK_INTERVAL_MS", 200)?;
        let max_generations = parse_var(&lookup, "CONWAY_MAX_GENERATIONS", defaults.max_generations)?;
        let history_len = parse_var(&lookup, "CONWAY_HISTORY_LEN", defaults.history_len)?;
        let grid_rows = parse_var(&lookup, "CONWAY_GRID_ROWS", defaults.grid_rows)?;
        let grid_cols = parse_var(&lookup, "CONWAY_GRID_COLS", defaults.grid_cols)?;

        if grid_rows == 0 || grid_cols == 0 {
            return Err(AppError::Config(format!(
                "grid must be at least 1x1, got {grid_rows}x{grid_cols}"
            )));
        }

        Ok(Self {
            state_file,
            tick_interval: Duration::from_millis(tick_interval_ms),
            max_generations,
            history_len,
            grid_rows,
            grid_cols,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("invalid {key}: {e}"))),
    }
}
