//! Browser localStorage store (wasm32)

use super::{HIGH_SCORE_KEY, HighScoreStore};
use crate::error::PersistenceError;

/// Keeps the high score as a decimal string under [`HIGH_SCORE_KEY`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, PersistenceError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| PersistenceError::Unavailable("localStorage is not accessible".into()))
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load_high_score(&mut self) -> Result<u64, PersistenceError> {
        let storage = Self::storage()?;
        let value = storage
            .get_item(HIGH_SCORE_KEY)
            .map_err(|e| PersistenceError::Unavailable(format!("{e:?}")))?;
        match value {
            Some(text) => text
                .trim()
                .parse()
                .map_err(|_| PersistenceError::NotANumber(text)),
            None => Ok(0),
        }
    }

    fn save_high_score(&mut self, score: u64) -> Result<(), PersistenceError> {
        Self::storage()?
            .set_item(HIGH_SCORE_KEY, &score.to_string())
            .map_err(|e| PersistenceError::Unavailable(format!("{e:?}")))
    }
}
