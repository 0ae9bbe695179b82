//! High score persistence
//!
//! The session talks to storage only through [`HighScoreStore`]. Adapters:
//! - [`MemoryStore`]: in-process, for tests and embedding
//! - [`JsonFileStore`]: native, a small JSON document on disk
//! - `LocalStorageStore`: browser localStorage (wasm32 only)

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use crate::error::PersistenceError;

/// Fixed key the high score is stored under
pub const HIGH_SCORE_KEY: &str = "neonTowerHighScore";

/// Storage port for the single persisted high score
pub trait HighScoreStore {
    /// Stored high score, 0 if nothing has been saved yet
    fn load_high_score(&mut self) -> Result<u64, PersistenceError>;
    fn save_high_score(&mut self, score: u64) -> Result<(), PersistenceError>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    score: Option<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u64) -> Self {
        Self { score: Some(score) }
    }

    pub fn stored(&self) -> Option<u64> {
        self.score
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&mut self) -> Result<u64, PersistenceError> {
        Ok(self.score.unwrap_or(0))
    }

    fn save_high_score(&mut self, score: u64) -> Result<(), PersistenceError> {
        self.score = Some(score);
        Ok(())
    }
}
