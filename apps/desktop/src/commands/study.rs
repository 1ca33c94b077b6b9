//! Study session commands.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use flashtrack_core::{filter, shuffle, stats, Advance, Card, CardStorage, StudySession};
use serde::Serialize;

use super::CommandError;
use crate::state::AppState;

/// Delay between a navigation request and the index actually moving,
/// long enough for the flip-back animation to play out. The session
/// lock is held across it, so a rapid second navigation queues behind
/// the first instead of stacking or cancelling it.
const FLIP_BACK_DELAY: Duration = Duration::from_millis(300);

/// What the UI renders for an active session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub card: Card,
    /// 1-based position for "card i of n" display.
    pub position: usize,
    pub total: usize,
    pub flipped: bool,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub elapsed_seconds: u64,
    pub elapsed_display: String,
}

/// Result of a navigation command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavOutcome {
    /// One-shot deck completion signal for this navigation.
    pub deck_completed: bool,
    pub snapshot: SessionSnapshot,
}

fn snapshot(session: &StudySession) -> SessionSnapshot {
    SessionSnapshot {
        card: session.current_card().clone(),
        position: session.current_index() + 1,
        total: session.total(),
        flipped: session.flipped(),
        correct_count: session.correct_count(),
        wrong_count: session.wrong_count(),
        elapsed_seconds: session.elapsed_seconds(),
        elapsed_display: stats::format_duration(session.elapsed_seconds()),
    }
}

fn no_active_session() -> CommandError {
    CommandError {
        message: "no active study session".to_string(),
    }
}

/// Start a session over the current collection, honoring the search
/// query when one is active and optionally shuffling the sequence.
/// Replaces any session already running.
pub async fn start_session<S: CardStorage>(
    state: &AppState<S>,
    query: Option<String>,
    shuffled: bool,
) -> Result<SessionSnapshot, CommandError> {
    let mut cards = {
        let store = state.store.lock().expect("store lock");
        match query.as_deref() {
            Some(q) if !q.trim().is_empty() => filter::search(store.cards(), q),
            _ => store.cards().to_vec(),
        }
    };
    if shuffled {
        shuffle::shuffle(&mut cards);
    }

    let session = StudySession::start(cards)?;
    let snap = snapshot(&session);
    *state.session.lock().await = Some(session);
    state.timer.lock().await.start(Arc::clone(&state.session));
    tracing::debug!(total = snap.total, shuffled, "study session started");
    Ok(snap)
}

/// Snapshot of the running session, if any.
pub async fn get_session<S: CardStorage>(
    state: &AppState<S>,
) -> Result<Option<SessionSnapshot>, CommandError> {
    Ok(state.session.lock().await.as_ref().map(snapshot))
}

/// Toggle between question and answer on the current card.
pub async fn flip_card<S: CardStorage>(
    state: &AppState<S>,
) -> Result<SessionSnapshot, CommandError> {
    let mut guard = state.session.lock().await;
    let session = guard.as_mut().ok_or_else(no_active_session)?;
    session.flip();
    Ok(snapshot(session))
}

/// Move to the next card: flip back first, apply the index change
/// after the flip-back delay. At the last card the index stays put
/// and `deck_completed` fires once per arrival.
pub async fn next_card<S: CardStorage>(state: &AppState<S>) -> Result<NavOutcome, CommandError> {
    let mut guard = state.session.lock().await;
    let session = guard.as_mut().ok_or_else(no_active_session)?;

    session.flip_down();
    tokio::time::sleep(FLIP_BACK_DELAY).await;
    let advance = session.advance();
    Ok(NavOutcome {
        deck_completed: advance == Advance::DeckCompleted,
        snapshot: snapshot(session),
    })
}

/// Move to the previous card, clamping at the first.
pub async fn previous_card<S: CardStorage>(
    state: &AppState<S>,
) -> Result<SessionSnapshot, CommandError> {
    let mut guard = state.session.lock().await;
    let session = guard.as_mut().ok_or_else(no_active_session)?;

    session.flip_down();
    tokio::time::sleep(FLIP_BACK_DELAY).await;
    session.retreat();
    Ok(snapshot(session))
}

/// Record an answer for the current card, stamp its review time in
/// the store, then move on like `next_card`. The timestamp goes to
/// the card that was answered, not the one the move lands on.
pub async fn submit_response<S: CardStorage>(
    state: &AppState<S>,
    correct: bool,
) -> Result<NavOutcome, CommandError> {
    let mut guard = state.session.lock().await;
    let session = guard.as_mut().ok_or_else(no_active_session)?;

    {
        let mut store = state.store.lock().expect("store lock");
        store.record_review(session.current_card().id, Utc::now())?;
    }

    session.flip_down();
    tokio::time::sleep(FLIP_BACK_DELAY).await;
    let response = session.record_response(correct);
    Ok(NavOutcome {
        deck_completed: response.advance == Advance::DeckCompleted,
        snapshot: snapshot(session),
    })
}

/// Leave the session: stop the timer, discard all session state.
/// Idempotent; doubles as reset.
pub async fn exit_session<S: CardStorage>(state: &AppState<S>) -> Result<(), CommandError> {
    state.timer.lock().await.stop();
    *state.session.lock().await = None;
    tracing::debug!("study session exited");
    Ok(())
}
