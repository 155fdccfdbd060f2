//! A standard 52-card playing deck with optional `no_std` support.
//!
//! The crate provides [`Card`] values built from a [`Suit`] and a [`Rank`],
//! and a [`Deck`] type that handles shuffling, dealing, peeking, inserting,
//! filtering, sorting, and counting.
//!
//! # Example
//!
//! ```
//! use deckrs::Deck;
//!
//! let mut deck = Deck::new();
//! deck.shuffle_with_seed(42);
//! let hand = deck.deal_n(5).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.size(), 47);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::DeckError;
