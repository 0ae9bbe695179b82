//! Best score tracking
//!
//! A single number survives across sessions. Loading and saving go through
//! the persistence port; any storage failure degrades to an in-memory score.

use serde::{Deserialize, Serialize};

use crate::persistence::HighScoreStore;

/// Best score seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    pub fn new(best: u64) -> Self {
        Self { best }
    }

    /// Check if a score would replace the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Adopt `score` if it beats the best; returns true if it did
    pub fn record(&mut self, score: u64) -> bool {
        if self.qualifies(score) {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Load from the store, falling back to 0 if storage is unavailable
    pub fn load(store: &mut impl HighScoreStore) -> Self {
        match store.load_high_score() {
            Ok(best) => {
                log::info!("Loaded high score {}", best);
                Self { best }
            }
            Err(e) => {
                log::warn!("High score unavailable, starting from 0: {}", e);
                Self::default()
            }
        }
    }

    /// Write the current best; failures are logged and otherwise ignored
    pub fn save(&self, store: &mut impl HighScoreStore) -> bool {
        match store.save_high_score(self.best) {
            Ok(()) => {
                log::info!("High score saved ({})", self.best);
                true
            }
            Err(e) => {
                log::warn!("Could not save high score {}: {}", self.best, e);
                false
            }
        }
    }
}
