//! Free-text search over the card collection.

use crate::types::Card;

/// Filter cards by a case-insensitive substring match on question or
/// answer, preserving relative order. A blank query returns the input
/// unchanged. Pure; recomputed on every collection or query change.
pub fn search(cards: &[Card], query: &str) -> Vec<Card> {
    let query = query.trim();
    if query.is_empty() {
        return cards.to_vec();
    }

    let needle = query.to_lowercase();
    cards
        .iter()
        .filter(|c| {
            c.question.to_lowercase().contains(&needle)
                || c.answer.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
