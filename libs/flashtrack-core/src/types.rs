//! Core types for the flashtrack application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Card difficulty tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// A user-authored flashcard.
///
/// Serialized form uses camelCase field names and skips absent
/// optionals, matching the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique id, assigned at creation, immutable.
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub starred: bool,
    /// Set when the user records an answer for this card during a
    /// study session; absent until first review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
    /// Always set at creation; may be absent in records persisted
    /// before the field existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl Card {
    /// Create a card with a fresh id, unstarred and unreviewed.
    /// Blank-field validation happens in the store, not here.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: question.into(),
            answer: answer.into(),
            starred: false,
            last_reviewed: None,
            difficulty: Some(difficulty),
        }
    }

    /// Difficulty for display: `Medium` when the persisted record
    /// predates the field.
    pub fn difficulty_or_default(&self) -> Difficulty {
        self.difficulty.unwrap_or_default()
    }
}
