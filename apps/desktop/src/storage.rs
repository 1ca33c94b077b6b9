//! JSON file storage backend for the card collection.
//!
//! One fixed file holds the whole collection as a JSON array; every
//! save rewrites it. A missing or malformed file loads as an empty
//! collection so startup never fails on bad data.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flashtrack_core::{Card, CardStorage, StorageError};

/// File name of the persisted collection.
pub const STORAGE_FILE: &str = "flashcards.json";

/// Default storage path under the platform-local data directory.
pub fn default_storage_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flashtrack")
        .join(STORAGE_FILE)
}

pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CardStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Card>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(cards) => Ok(cards),
            Err(e) => {
                // Unreadable saved data is discarded wholesale, not
                // repaired or partially recovered.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "malformed saved flashcards, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, cards: &[Card]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json =
            serde_json::to_string(cards).map_err(|e| StorageError::Serialize(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
