//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when drawing from or inserting into a deck.
///
/// A failed operation never modifies the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards.
    #[error("the deck is empty")]
    EmptyDeck,
    /// The requested number of cards is negative.
    #[error("card count must not be negative")]
    InvalidCount,
    /// The deck holds fewer cards than requested.
    #[error("not enough cards in the deck")]
    InsufficientCards,
    /// The insertion index is outside `0..=size`.
    #[error("invalid insert position")]
    InvalidPosition,
}
