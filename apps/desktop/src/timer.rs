//! One-second study session timer.

use std::sync::Arc;
use std::time::Duration;

use flashtrack_core::StudySession;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Owns the interval task that ticks the active session once per
/// second. At most one task is alive per timer; starting again
/// replaces the previous task and stopping is idempotent.
pub struct SessionTimer {
    handle: Option<JoinHandle<()>>,
}

impl SessionTimer {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Begin ticking the session behind `slot`. The task exits on its
    /// own if the session disappears from the slot.
    pub fn start(&mut self, slot: Arc<Mutex<Option<StudySession>>>) {
        self.stop();
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // A tokio interval fires immediately; swallow the first
            // tick so the counter moves one second after start.
            interval.tick().await;
            loop {
                interval.tick().await;
                match slot.lock().await.as_mut() {
                    Some(session) => session.tick(),
                    None => break,
                }
            }
        }));
    }

    /// Stop ticking. Safe to call with no timer running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
