//! Application state.

use std::sync::{Arc, Mutex};

use flashtrack_core::{CardStorage, CardStore, StudySession};
use tokio::sync::Mutex as AsyncMutex;

use crate::storage::JsonFileStorage;
use crate::timer::SessionTimer;

/// Global application state handed to every command.
///
/// The card store is the only writer of persisted state; the session
/// slot is `None` while idle. The async mutex on the session is what
/// queues a second navigation issued during the flip-back delay.
pub struct AppState<S: CardStorage = JsonFileStorage> {
    pub store: Arc<Mutex<CardStore<S>>>,
    pub session: Arc<AsyncMutex<Option<StudySession>>>,
    pub timer: AsyncMutex<SessionTimer>,
}

impl<S: CardStorage> AppState<S> {
    pub fn new(store: CardStore<S>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            session: Arc::new(AsyncMutex::new(None)),
            timer: AsyncMutex::new(SessionTimer::new()),
        }
    }
}
