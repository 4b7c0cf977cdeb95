//! Error types for game construction.

use thiserror::Error;

use crate::card::CardId;

/// Errors that can occur when building a game from a caller-supplied deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck does not contain exactly 52 cards.
    #[error("deck must contain exactly 52 cards, got {0}")]
    WrongSize(usize),
    /// Two cards share an id.
    #[error("duplicate card id {0}")]
    DuplicateId(CardId),
    /// Some (suit, rank) pair is missing or repeated.
    #[error("deck does not cover every suit and rank exactly once")]
    IncompleteCover,
}
