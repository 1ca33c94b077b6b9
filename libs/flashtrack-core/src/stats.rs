//! Derived read-only statistics over cards and session counters.

use crate::types::{Card, Difficulty};

/// Percentage of correct responses, rounded half-up. Zero when no
/// responses have been recorded.
pub fn accuracy_percent(correct: u32, wrong: u32) -> u32 {
    let total = correct + wrong;
    if total == 0 {
        return 0;
    }
    (f64::from(correct) / f64::from(total) * 100.0).round() as u32
}

/// Cards tagged with exactly `level`. Records without a difficulty
/// (legacy data) match no level; creation always assigns one.
pub fn count_by_difficulty(cards: &[Card], level: Difficulty) -> usize {
    cards.iter().filter(|c| c.difficulty == Some(level)).count()
}

pub fn starred_count(cards: &[Card]) -> usize {
    cards.iter().filter(|c| c.starred).count()
}

/// `m:ss` display form, e.g. 75 seconds -> "1:15".
pub fn format_duration(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
