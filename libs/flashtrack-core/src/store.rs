//! Card store: sole owner of the durable card collection.
//!
//! Every mutation rewrites the full collection through the storage
//! collaborator; there is no partial or incremental persistence.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::StorageError;
use crate::types::{Card, Difficulty};

/// Storage collaborator for the card collection.
pub trait CardStorage {
    /// Read the persisted collection. Backends are expected to treat
    /// missing or unreadable data as an empty collection rather than
    /// fail; `Err` is reserved for genuine IO trouble.
    fn load(&self) -> Result<Vec<Card>, StorageError>;

    /// Replace the persisted collection.
    fn save(&self, cards: &[Card]) -> Result<(), StorageError>;
}

impl<S: CardStorage + ?Sized> CardStorage for Arc<S> {
    fn load(&self) -> Result<Vec<Card>, StorageError> {
        (**self).load()
    }

    fn save(&self, cards: &[Card]) -> Result<(), StorageError> {
        (**self).save(cards)
    }
}

/// Outcome of an add.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(Card),
    /// Question or answer was blank after trimming; nothing changed
    /// and nothing was persisted.
    RejectedBlank,
}

/// Owns the in-memory collection and keeps the backend in sync.
pub struct CardStore<S: CardStorage> {
    storage: S,
    cards: Vec<Card>,
}

impl<S: CardStorage> CardStore<S> {
    /// Open the store from whatever the backend holds. Load failures
    /// are absorbed into an empty collection so startup never fails
    /// on bad data.
    pub fn open(storage: S) -> Self {
        let cards = storage.load().unwrap_or_default();
        Self { storage, cards }
    }

    /// Snapshot of the collection in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: Uuid) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Create a card at the end of the collection. Blank question or
    /// answer (after trimming) rejects silently.
    pub fn add(
        &mut self,
        question: &str,
        answer: &str,
        difficulty: Difficulty,
    ) -> Result<AddOutcome, StorageError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return Ok(AddOutcome::RejectedBlank);
        }

        let card = Card::new(question, answer, difficulty);
        self.cards.push(card.clone());
        self.persist()?;
        Ok(AddOutcome::Added(card))
    }

    /// Replace question, answer and difficulty in place; the card
    /// keeps its position. Same blank rejection as `add`; unknown id
    /// is a no-op.
    pub fn update(
        &mut self,
        id: Uuid,
        question: &str,
        answer: &str,
        difficulty: Difficulty,
    ) -> Result<(), StorageError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return Ok(());
        }

        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            return Ok(());
        };
        card.question = question.to_string();
        card.answer = answer.to_string();
        card.difficulty = Some(difficulty);
        self.persist()
    }

    /// Remove a card. Unknown id is a no-op.
    pub fn delete(&mut self, id: Uuid) -> Result<(), StorageError> {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        if self.cards.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Flip the starred flag. Unknown id is a no-op.
    pub fn toggle_star(&mut self, id: Uuid) -> Result<(), StorageError> {
        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            return Ok(());
        };
        card.starred = !card.starred;
        self.persist()
    }

    /// Stamp the last-reviewed time. Unknown id is a no-op.
    pub fn record_review(&mut self, id: Uuid, now: DateTime<Utc>) -> Result<(), StorageError> {
        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            return Ok(());
        };
        card.last_reviewed = Some(now);
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(&self.cards)
    }
}

/// In-memory storage backend for tests and ephemeral stores.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    cards: Mutex<Vec<Card>>,
}

impl CardStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Card>, StorageError> {
        Ok(self.cards.lock().expect("storage lock").clone())
    }

    fn save(&self, cards: &[Card]) -> Result<(), StorageError> {
        *self.cards.lock().expect("storage lock") = cards.to_vec();
        Ok(())
    }
}
