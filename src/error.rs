//! Error types
//!
//! Configuration errors are fatal at session construction. Persistence errors
//! are always recovered by the session (logged, then ignored).

use thiserror::Error;

/// Rejected [`Settings`](crate::Settings)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("field width must be positive and finite, got {0}")]
    FieldWidth(f32),
    #[error("viewport height must be positive and finite, got {0}")]
    ViewportHeight(f32),
    #[error("actor size must be positive and finite, got {width}x{height}")]
    ActorSize { width: f32, height: f32 },
    #[error("max jumps must be at least 1")]
    ZeroMaxJumps,
    #[error("{0} window must last at least one frame")]
    ZeroWindow(&'static str),
    #[error("game over margin must be non-negative and finite, got {0}")]
    GameOverMargin(f32),
}

/// Failure talking to the high score store
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored high score is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("stored high score is not a number: {0:?}")]
    NotANumber(String),
}
