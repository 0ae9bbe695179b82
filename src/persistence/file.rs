//! JSON file store (native)

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{HIGH_SCORE_KEY, HighScoreStore};
use crate::error::PersistenceError;

/// Keeps the high score in a JSON object on disk: `{"neonTowerHighScore": 123}`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<BTreeMap<String, u64>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl HighScoreStore for JsonFileStore {
    fn load_high_score(&mut self) -> Result<u64, PersistenceError> {
        let document = self.read_document()?;
        Ok(document.get(HIGH_SCORE_KEY).copied().unwrap_or(0))
    }

    fn save_high_score(&mut self, score: u64) -> Result<(), PersistenceError> {
        let mut document = BTreeMap::new();
        document.insert(HIGH_SCORE_KEY.to_string(), score);
        let json = serde_json::to_string_pretty(&document)?;

        // Write-then-rename so a crash never leaves a half-written file
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("high score {} written to {}", score, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("scores.json"));
        assert_eq!(store.load_high_score().unwrap(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        let mut store = JsonFileStore::new(&path);
        store.save_high_score(1234).unwrap();

        let mut reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.load_high_score().unwrap(), 1234);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains(HIGH_SCORE_KEY));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json").unwrap();
        let mut store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load_high_score(),
            Err(PersistenceError::Corrupt(_))
        ));
    }
}
