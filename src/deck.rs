//! The deck container and its operations.

use alloc::collections::{VecDeque, vec_deque};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered sequence of cards. Index 0 is the top of the deck.
///
/// A deck may hold any cards, including duplicates, in any order. Only
/// [`Deck::new`] and [`Deck::reset`] guarantee a standard 52-card layout.
///
/// `Deck` has no interior locking. Sharing one between threads requires
/// wrapping it in a lock such as `Mutex<Deck>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Deck {
    /// Cards from top to bottom.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a standard 52-card deck.
    ///
    /// Cards are ordered by suit (Spades, Hearts, Diamonds, Clubs) and,
    /// within each suit, by rank from Ace to King.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck, Rank, Suit};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.size(), 52);
    /// assert_eq!(deck.peek(), Ok(Card::new(Suit::Spades, Rank::Ace)));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a deck holding a copy of `cards`, top card first.
    ///
    /// The cards are not validated or deduplicated.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a copy of the cards, top card first.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Returns an iterator over the cards, top card first.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether the deck holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck has no cards.
    pub fn peek(&self) -> Result<Card, DeckError> {
        self.cards.front().copied().ok_or(DeckError::EmptyDeck)
    }

    /// Returns a copy of the top `n` cards without removing them.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidCount`] if `n` is negative and
    /// [`DeckError::InsufficientCards`] if `n` exceeds the deck size.
    pub fn peek_n<N>(&self, n: N) -> Result<Vec<Card>, DeckError>
    where
        N: TryInto<usize> + PartialOrd + Default,
    {
        let n = self.checked_count(n)?;
        Ok(self.cards.iter().take(n).copied().collect())
    }

    /// Counts the cards of each suit present in the deck.
    ///
    /// Suits with no cards are absent from the map.
    #[must_use]
    pub fn count_by_suit(&self) -> HashMap<Suit, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(card.suit).or_insert(0) += 1;
        }
        counts
    }

    /// Counts the cards of each rank present in the deck.
    ///
    /// Ranks with no cards are absent from the map.
    #[must_use]
    pub fn count_by_rank(&self) -> HashMap<Rank, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        counts
    }

    /// Shuffles the deck with a generator seeded from OS entropy.
    ///
    /// Every call uses a fresh generator, so results are not reproducible.
    /// Use [`Deck::shuffle_with_seed`] for a repeatable order.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot supply entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle(&mut self) {
        let mut rng = ChaCha8Rng::from_os_rng();
        self.shuffle_with_rng(&mut rng);
    }

    /// Shuffles the deck deterministically from `seed`.
    ///
    /// Two decks with the same cards in the same order end up in the same
    /// order when shuffled with the same seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let mut a = Deck::new();
    /// let mut b = Deck::new();
    /// a.shuffle_with_seed(42);
    /// b.shuffle_with_seed(42);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with_rng(&mut rng);
    }

    /// Shuffles the deck in place using `rng` (Fisher-Yates).
    ///
    /// Walks from the bottom card up to the second card, swapping each
    /// position `i` with a uniformly chosen position in `0..=i`.
    pub fn shuffle_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cards = self.cards.make_contiguous();
        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck has no cards.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::EmptyDeck)
    }

    /// Removes and returns the top `n` cards, top card first.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidCount`] if `n` is negative and
    /// [`DeckError::InsufficientCards`] if `n` exceeds the deck size. The
    /// deck is left untouched on error.
    pub fn deal_n<N>(&mut self, n: N) -> Result<Vec<Card>, DeckError>
    where
        N: TryInto<usize> + PartialOrd + Default,
    {
        let n = self.checked_count(n)?;
        Ok(self.cards.drain(..n).collect())
    }

    /// Adds a card to the bottom of the deck.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Adds cards to the bottom of the deck, keeping their order.
    pub fn add_cards(&mut self, cards: &[Card]) {
        self.cards.extend(cards);
    }

    /// Inserts a card at `position`, where 0 is the top and `size()` the
    /// bottom. Cards at or after `position` move down by one.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidPosition`] if `position` is negative or
    /// greater than the deck size.
    pub fn insert_card<P: TryInto<usize>>(
        &mut self,
        card: Card,
        position: P,
    ) -> Result<(), DeckError> {
        let position = position
            .try_into()
            .map_err(|_| DeckError::InvalidPosition)?;
        if position > self.cards.len() {
            return Err(DeckError::InvalidPosition);
        }

        self.cards.insert(position, card);
        Ok(())
    }

    /// Removes the topmost card equal to `card`.
    ///
    /// Returns `false` if the deck holds no such card.
    pub fn remove_card(&mut self, card: Card) -> bool {
        let Some(index) = self.cards.iter().position(|c| *c == card) else {
            return false;
        };
        self.cards.remove(index);
        true
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Restores the deck to a standard 52-card deck in [`Deck::new`] order.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns a new deck holding the cards that match `predicate`, in their
    /// current order. This deck is not modified.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Card) -> bool,
    {
        self.cards
            .iter()
            .filter(|card| predicate(card))
            .copied()
            .collect()
    }

    /// Sorts the deck by suit, then by rank.
    pub fn sort(&mut self) {
        self.cards.make_contiguous().sort();
    }

    /// Validates a requested card count against the deck size.
    ///
    /// A non-negative count too wide for `usize` is always larger than the
    /// deck, so a failed conversion after the sign check is
    /// `InsufficientCards`.
    fn checked_count<N>(&self, n: N) -> Result<usize, DeckError>
    where
        N: TryInto<usize> + PartialOrd + Default,
    {
        if n < N::default() {
            return Err(DeckError::InvalidCount);
        }
        match n.try_into() {
            Ok(n) if n <= self.cards.len() => Ok(n),
            _ => Err(DeckError::InsufficientCards),
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
