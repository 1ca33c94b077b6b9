//! Application shell for flashtrack: wires the core card store and
//! study session to a JSON file backend, a one-second session timer
//! and the command surface the UI invokes.

pub mod commands;
pub mod state;
pub mod storage;
pub mod timer;

use flashtrack_core::CardStore;

use state::AppState;
use storage::{default_storage_path, JsonFileStorage};

/// Install the tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Build application state backed by the platform data directory.
pub fn open_default() -> AppState {
    let storage = JsonFileStorage::new(default_storage_path());
    AppState::new(CardStore::open(storage))
}
