//! Collection export.

use std::fs;
use std::path::{Path, PathBuf};

use flashtrack_core::CardStorage;

use super::CommandError;
use crate::state::AppState;

/// File name offered for download.
pub const EXPORT_FILE: &str = "flashcards-export.json";

/// Write the full collection into `dir` as a bare JSON array (no
/// envelope, no metadata) and return the file path.
pub async fn export_cards<S: CardStorage>(
    state: &AppState<S>,
    dir: &Path,
) -> Result<PathBuf, CommandError> {
    let json = {
        let store = state.store.lock().expect("store lock");
        serde_json::to_string(store.cards()).map_err(|e| CommandError {
            message: e.to_string(),
        })?
    };

    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE);
    fs::write(&path, json)?;
    tracing::info!(path = %path.display(), "exported flashcards");
    Ok(path)
}
