//! Statistics commands.

use flashtrack_core::{stats, CardStorage, Difficulty};
use serde::Serialize;

use super::CommandError;
use crate::state::AppState;

/// Aggregate snapshot for the statistics view. Assembled on demand
/// from the store and the live session counters; owns no state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyStats {
    pub total_cards: usize,
    pub starred_count: usize,
    pub easy_count: usize,
    pub medium_count: usize,
    pub hard_count: usize,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub accuracy_percent: u32,
    pub elapsed_seconds: u64,
    pub elapsed_display: String,
}

/// Compute current statistics. Session counters read as zero while
/// idle.
pub async fn get_stats<S: CardStorage>(state: &AppState<S>) -> Result<StudyStats, CommandError> {
    let (total_cards, starred_count, easy_count, medium_count, hard_count) = {
        let store = state.store.lock().expect("store lock");
        let cards = store.cards();
        (
            cards.len(),
            stats::starred_count(cards),
            stats::count_by_difficulty(cards, Difficulty::Easy),
            stats::count_by_difficulty(cards, Difficulty::Medium),
            stats::count_by_difficulty(cards, Difficulty::Hard),
        )
    };

    let (correct, wrong, elapsed) = match state.session.lock().await.as_ref() {
        Some(s) => (s.correct_count(), s.wrong_count(), s.elapsed_seconds()),
        None => (0, 0, 0),
    };

    Ok(StudyStats {
        total_cards,
        starred_count,
        easy_count,
        medium_count,
        hard_count,
        correct_count: correct,
        wrong_count: wrong,
        accuracy_percent: stats::accuracy_percent(correct, wrong),
        elapsed_seconds: elapsed,
        elapsed_display: stats::format_duration(elapsed),
    })
}
