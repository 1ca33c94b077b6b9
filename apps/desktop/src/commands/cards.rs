//! Card collection commands.

use flashtrack_core::{filter, AddOutcome, Card, CardStorage, Difficulty};
use uuid::Uuid;

use super::CommandError;
use crate::state::AppState;

/// List the full collection in insertion order.
pub async fn list_cards<S: CardStorage>(state: &AppState<S>) -> Result<Vec<Card>, CommandError> {
    let store = state.store.lock().expect("store lock");
    Ok(store.cards().to_vec())
}

/// Create a card. A blank question or answer is silently rejected and
/// yields `None`; the collection is untouched.
pub async fn add_card<S: CardStorage>(
    state: &AppState<S>,
    question: String,
    answer: String,
    difficulty: Option<Difficulty>,
) -> Result<Option<Card>, CommandError> {
    let mut store = state.store.lock().expect("store lock");
    match store.add(&question, &answer, difficulty.unwrap_or_default())? {
        AddOutcome::Added(card) => Ok(Some(card)),
        AddOutcome::RejectedBlank => Ok(None),
    }
}

/// Edit a card's question, answer and difficulty. Blank fields and
/// unknown ids are no-ops.
pub async fn update_card<S: CardStorage>(
    state: &AppState<S>,
    id: Uuid,
    question: String,
    answer: String,
    difficulty: Option<Difficulty>,
) -> Result<(), CommandError> {
    let mut store = state.store.lock().expect("store lock");
    store
        .update(id, &question, &answer, difficulty.unwrap_or_default())
        .map_err(Into::into)
}

/// Delete a card. If the deleted card is part of the active study
/// sequence the session is ended, so it can never show a stale card.
pub async fn delete_card<S: CardStorage>(
    state: &AppState<S>,
    id: Uuid,
) -> Result<(), CommandError> {
    {
        let mut store = state.store.lock().expect("store lock");
        store.delete(id)?;
    }

    let mut session = state.session.lock().await;
    let affected = session
        .as_ref()
        .is_some_and(|s| s.cards().iter().any(|c| c.id == id));
    if affected {
        state.timer.lock().await.stop();
        *session = None;
        tracing::debug!(%id, "active session ended by card deletion");
    }
    Ok(())
}

/// Flip the starred flag on a card.
pub async fn toggle_star<S: CardStorage>(
    state: &AppState<S>,
    id: Uuid,
) -> Result<(), CommandError> {
    let mut store = state.store.lock().expect("store lock");
    store.toggle_star(id).map_err(Into::into)
}

/// Search the collection by free text.
pub async fn search_cards<S: CardStorage>(
    state: &AppState<S>,
    query: String,
) -> Result<Vec<Card>, CommandError> {
    let store = state.store.lock().expect("store lock");
    Ok(filter::search(store.cards(), &query))
}
