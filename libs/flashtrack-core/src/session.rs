//! Study session state machine.
//!
//! A session is an ordered traversal of a fixed card sequence with a
//! flip flag, response counters and a wall-clock second counter. The
//! machine here is the `Active` state; `Idle` is its absence, so
//! constructing a session is the start transition and dropping (or
//! replacing) it is exit/reset. Session state is ephemeral and never
//! persisted; only review timestamps flow back into the card store.

use uuid::Uuid;

use crate::error::SessionError;
use crate::types::Card;

/// Outcome of a forward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next card.
    Moved,
    /// Already at the last card; deck completion fired for this
    /// arrival at the boundary.
    DeckCompleted,
    /// Already at the last card and completion was already signaled.
    AtEnd,
}

/// Outcome of recording an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    /// The card the answer applies to: the one shown when the user
    /// responded, not the one the follow-up advance lands on.
    pub card_id: Uuid,
    pub advance: Advance,
}

#[derive(Debug, Clone)]
pub struct StudySession {
    cards: Vec<Card>,
    current_index: usize,
    flipped: bool,
    correct_count: u32,
    wrong_count: u32,
    elapsed_seconds: u64,
    completion_signaled: bool,
}

impl StudySession {
    /// Start a session over `cards`. An empty sequence is rejected;
    /// callers must not offer a session on an empty collection.
    pub fn start(cards: Vec<Card>) -> Result<Self, SessionError> {
        if cards.is_empty() {
            return Err(SessionError::EmptyDeck);
        }
        Ok(Self {
            cards,
            current_index: 0,
            flipped: false,
            correct_count: 0,
            wrong_count: 0,
            elapsed_seconds: 0,
            completion_signaled: false,
        })
    }

    pub fn current_card(&self) -> &Card {
        // current_index stays within bounds by construction.
        &self.cards[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Toggle between question and answer side.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Show the question side again without moving.
    pub fn flip_down(&mut self) {
        self.flipped = false;
    }

    /// Move to the next card, clamping at the end. At the last index
    /// the index stays put and deck completion is signaled exactly
    /// once per arrival at the boundary.
    pub fn advance(&mut self) -> Advance {
        if self.current_index + 1 < self.cards.len() {
            self.current_index += 1;
            self.flipped = false;
            self.completion_signaled = false;
            Advance::Moved
        } else if !self.completion_signaled {
            self.completion_signaled = true;
            Advance::DeckCompleted
        } else {
            Advance::AtEnd
        }
    }

    /// Move to the previous card, clamping at index 0.
    pub fn retreat(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.flipped = false;
            self.completion_signaled = false;
        }
    }

    /// Record an answer for the current card, then advance. The
    /// returned id names the card the answer belongs to so the owner
    /// can stamp its review time in the store.
    pub fn record_response(&mut self, correct: bool) -> Response {
        if correct {
            self.correct_count += 1;
        } else {
            self.wrong_count += 1;
        }
        let card_id = self.cards[self.current_index].id;
        let advance = self.advance();
        Response { card_id, advance }
    }

    /// One wall-clock second elapsed. Driven by the timer that owns
    /// the session's lifetime; never called once the session is gone.
    pub fn tick(&mut self) {
        self.elapsed_seconds += 1;
    }
}
