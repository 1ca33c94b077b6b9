//! End-to-end command flow over the application state: collection
//! edits, study sessions, the timer and export.

use std::time::Duration;

use flashtrack_core::{CardStore, Difficulty, MemoryStorage};
use flashtrack_desktop::commands::{cards, export, stats, study};
use flashtrack_desktop::state::AppState;
use pretty_assertions::assert_eq;

fn app() -> AppState<MemoryStorage> {
    AppState::new(CardStore::open(MemoryStorage::default()))
}

async fn seed(state: &AppState<MemoryStorage>) {
    for (q, a, d) in [
        ("Capital of France?", "Paris", Difficulty::Easy),
        ("Capital of Japan?", "Tokyo", Difficulty::Medium),
        ("2 + 2", "4", Difficulty::Hard),
    ] {
        cards::add_card(state, q.to_string(), a.to_string(), Some(d))
            .await
            .unwrap()
            .expect("seed card should be accepted");
    }
}

#[tokio::test(start_paused = true)]
async fn blank_cards_are_rejected_without_mutation() {
    let state = app();
    for (q, a) in [("", "x"), ("x", ""), ("  ", "  ")] {
        let added = cards::add_card(&state, q.to_string(), a.to_string(), None)
            .await
            .unwrap();
        assert!(added.is_none());
    }
    assert!(cards::list_cards(&state).await.unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn search_matches_case_insensitively() {
    let state = app();
    seed(&state).await;

    let hits = cards::search_cards(&state, "paris".to_string()).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].question, "Capital of France?");

    let hits = cards::search_cards(&state, "berlin".to_string()).await.unwrap();
    assert!(hits.is_empty());

    // Blank query returns everything in insertion order.
    let all = cards::search_cards(&state, "  ".to_string()).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn full_traversal_signals_completion_once() {
    let state = app();
    seed(&state).await;

    let snap = study::start_session(&state, None, false).await.unwrap();
    assert_eq!(snap.position, 1);
    assert_eq!(snap.total, 3);
    assert!(!snap.flipped);

    let snap = study::flip_card(&state).await.unwrap();
    assert!(snap.flipped);

    let nav = study::next_card(&state).await.unwrap();
    assert!(!nav.deck_completed);
    assert_eq!(nav.snapshot.position, 2);
    assert!(!nav.snapshot.flipped);

    let nav = study::next_card(&state).await.unwrap();
    assert_eq!(nav.snapshot.position, 3);

    // Third advance clamps at the last card and fires completion.
    let nav = study::next_card(&state).await.unwrap();
    assert!(nav.deck_completed);
    assert_eq!(nav.snapshot.position, 3);

    // Repeated advances at the boundary stay silent.
    let nav = study::next_card(&state).await.unwrap();
    assert!(!nav.deck_completed);

    study::exit_session(&state).await.unwrap();
    assert!(study::get_session(&state).await.unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn previous_clamps_at_the_first_card() {
    let state = app();
    seed(&state).await;

    study::start_session(&state, None, false).await.unwrap();
    let snap = study::previous_card(&state).await.unwrap();
    assert_eq!(snap.position, 1);

    study::next_card(&state).await.unwrap();
    let snap = study::previous_card(&state).await.unwrap();
    assert_eq!(snap.position, 1);
}

#[tokio::test(start_paused = true)]
async fn responses_update_counters_and_review_timestamps() {
    let state = app();
    seed(&state).await;

    let snap = study::start_session(&state, Some("capital".to_string()), false)
        .await
        .unwrap();
    assert_eq!(snap.total, 2);
    let first_id = snap.card.id;

    let nav = study::submit_response(&state, true).await.unwrap();
    assert!(!nav.deck_completed);
    assert_eq!(nav.snapshot.correct_count, 1);
    assert_eq!(nav.snapshot.wrong_count, 0);

    // The answered card got the timestamp, not the one we landed on.
    let listed = cards::list_cards(&state).await.unwrap();
    let answered = listed.iter().find(|c| c.id == first_id).unwrap();
    assert!(answered.last_reviewed.is_some());
    let current = listed.iter().find(|c| c.id == nav.snapshot.card.id).unwrap();
    assert!(current.last_reviewed.is_none());

    let nav = study::submit_response(&state, false).await.unwrap();
    assert!(nav.deck_completed);
    assert_eq!(nav.snapshot.wrong_count, 1);

    let stats = stats::get_stats(&state).await.unwrap();
    assert_eq!(stats.accuracy_percent, 50);
}

#[tokio::test(start_paused = true)]
async fn session_over_empty_filter_is_refused() {
    let state = app();
    seed(&state).await;

    let result = study::start_session(&state, Some("berlin".to_string()), false).await;
    assert!(result.is_err());
    assert!(study::get_session(&state).await.unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn shuffled_session_keeps_every_card() {
    let state = app();
    seed(&state).await;
    let mut expected: Vec<_> = cards::list_cards(&state)
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();

    let snap = study::start_session(&state, None, true).await.unwrap();
    assert_eq!(snap.total, 3);

    let mut seen = vec![snap.card.id];
    study::next_card(&state).await.unwrap();
    seen.push(study::get_session(&state).await.unwrap().unwrap().card.id);
    study::next_card(&state).await.unwrap();
    seen.push(study::get_session(&state).await.unwrap().unwrap().card.id);

    expected.sort();
    seen.sort();
    assert_eq!(seen, expected);
}

#[tokio::test(start_paused = true)]
async fn timer_ticks_once_per_second_while_active() {
    let state = app();
    seed(&state).await;

    study::start_session(&state, None, false).await.unwrap();
    tokio::time::sleep(Duration::from_millis(3100)).await;

    let snap = study::get_session(&state).await.unwrap().unwrap();
    assert_eq!(snap.elapsed_seconds, 3);
    assert_eq!(snap.elapsed_display, "0:03");

    study::exit_session(&state).await.unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;

    // A fresh session starts from zero; nothing kept ticking.
    let snap = study::start_session(&state, None, false).await.unwrap();
    assert_eq!(snap.elapsed_seconds, 0);
}

#[tokio::test(start_paused = true)]
async fn deleting_a_studied_card_ends_the_session() {
    let state = app();
    seed(&state).await;

    let snap = study::start_session(&state, None, false).await.unwrap();
    cards::delete_card(&state, snap.card.id).await.unwrap();

    assert!(study::get_session(&state).await.unwrap().is_none());
    assert_eq!(cards::list_cards(&state).await.unwrap().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn stats_reflect_collection_composition() {
    let state = app();
    seed(&state).await;
    let listed = cards::list_cards(&state).await.unwrap();
    cards::toggle_star(&state, listed[0].id).await.unwrap();

    let stats = stats::get_stats(&state).await.unwrap();
    assert_eq!(stats.total_cards, 3);
    assert_eq!(stats.starred_count, 1);
    assert_eq!(stats.easy_count, 1);
    assert_eq!(stats.medium_count, 1);
    assert_eq!(stats.hard_count, 1);
    // Idle session reads as zero.
    assert_eq!(stats.correct_count, 0);
    assert_eq!(stats.accuracy_percent, 0);
    assert_eq!(stats.elapsed_display, "0:00");
}

#[tokio::test(start_paused = true)]
async fn export_writes_bare_json_array() {
    let state = app();
    seed(&state).await;

    let dir = tempfile::tempdir().unwrap();
    let path = export::export_cards(&state, dir.path()).await.unwrap();
    assert_eq!(path.file_name().unwrap(), "flashcards-export.json");

    let raw = std::fs::read_to_string(&path).unwrap();
    let exported: Vec<flashtrack_core::Card> = serde_json::from_str(&raw).unwrap();
    assert_eq!(exported, cards::list_cards(&state).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn editing_keeps_position_and_identity() {
    let state = app();
    seed(&state).await;
    let listed = cards::list_cards(&state).await.unwrap();
    let id = listed[1].id;

    cards::update_card(
        &state,
        id,
        "Capital of Japan??".to_string(),
        "Tokyo!".to_string(),
        Some(Difficulty::Hard),
    )
    .await
    .unwrap();

    let listed = cards::list_cards(&state).await.unwrap();
    assert_eq!(listed[1].id, id);
    assert_eq!(listed[1].question, "Capital of Japan??");
    assert_eq!(listed[1].difficulty, Some(Difficulty::Hard));

    // Blank edits leave the card alone.
    cards::update_card(&state, id, "  ".to_string(), "x".to_string(), None)
        .await
        .unwrap();
    assert_eq!(
        cards::list_cards(&state).await.unwrap()[1].question,
        "Capital of Japan??"
    );
}
