// game.rs - Driver-side game state: the current snapshot and its persistence
//
// The core library is stateless; this is the caller that owns "the current
// generation" between commands, stored as JSON in the state file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use conway::{CycleHistory, Snapshot, StoredState, advance_concurrent};
use tracing::{debug, info};

use crate::error::AppError;

/// Async Conway's Game of Life run: one snapshot plus its recent history.
pub struct GameOfLife {
    current: Arc<Snapshot>,
    history: CycleHistory,
}

impl GameOfLife {
    pub fn new(start: Snapshot, history_len: usize) -> Self {
        let mut history = CycleHistory::new(history_len);
        history.observe(&start);
        Self { current: Arc::new(start), history }
    }

    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    pub fn into_snapshot(self) -> Snapshot {
        Arc::unwrap_or_clone(self.current)
    }

    /// Advances one generation with the row-concurrent engine. Returns `true`
    /// when the new grid repeats one seen recently.
    pub async fn update_generation(&mut self) -> Result<bool, AppError> {
        let next = advance_concurrent(Arc::clone(&self.current)).await?;
        let repeated = self.history.observe(&next);
        self.current = Arc::new(next);
        Ok(repeated)
    }
}

/// JSON file holding the stored state between commands.
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Snapshot, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(AppError::NoState),
            Err(source) => return Err(AppError::Io { path: self.path.clone(), source }),
        };
        let stored: StoredState = serde_json::from_str(&raw)?;
        debug!(path = %self.path.display(), generation = stored.generation_number, "loaded state");
        Ok(Snapshot::try_from(stored)?)
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(&snapshot.to_stored())?;
        fs::write(&self.path, json).map_err(|source| AppError::Io { path: self.path.clone(), source })?;
        debug!(path = %self.path.display(), generation = snapshot.generation(), "saved state");
        Ok(())
    }

    /// Forgets the stored state. Succeeds if there was none.
    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "state cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(AppError::Io { path: self.path.clone(), source }),
        }
    }
}
