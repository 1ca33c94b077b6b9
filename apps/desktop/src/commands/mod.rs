//! Command layer invoked by the UI shell.

pub mod cards;
pub mod export;
pub mod stats;
pub mod study;

use flashtrack_core::{SessionError, StorageError};

/// Serializable error handed back to the UI.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl From<StorageError> for CommandError {
    fn from(e: StorageError) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}

impl From<SessionError> for CommandError {
    fn from(e: SessionError) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(e: std::io::Error) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}
