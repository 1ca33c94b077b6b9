//! Core flashtrack library: the card collection, free-text search,
//! shuffle, the study session state machine and statistics.
//!
//! Pure domain logic with no IO of its own. The application shell in
//! `apps/desktop` supplies the storage backend, the session timer and
//! the command surface the UI calls.

pub mod error;
pub mod filter;
pub mod session;
pub mod shuffle;
pub mod stats;
pub mod store;
pub mod types;

pub use error::{SessionError, StorageError};
pub use session::{Advance, Response, StudySession};
pub use store::{AddOutcome, CardStorage, CardStore, MemoryStorage};
pub use types::{Card, Difficulty};
