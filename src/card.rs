//! Card, suit, and rank types.

use core::fmt;

/// Card suit.
///
/// Suits are ordered Spades < Hearts < Diamonds < Clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Every suit in canonical order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit at `index` in canonical order (0 = Spades).
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Spades),
            1 => Some(Self::Hearts),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Clubs),
            _ => None,
        }
    }

    /// Returns the display name, e.g. `"Hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }

    /// Returns the suit symbol, e.g. `"♥"`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "♠",
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
        }
    }

    /// Returns whether the suit is red (Hearts or Diamonds).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, Ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// Every rank from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank with the given numeric value (1 = Ace, 13 = King).
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=13 => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// Returns the numeric value (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the display name, e.g. `"Queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Returns the short symbol: `"A"`, `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns whether the rank is Jack, Queen, or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards compare by suit first, then by rank, which is the order
/// [`Deck::sort`](crate::Deck::sort) produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card is red (Hearts or Diamonds).
    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    /// Returns whether the card is black (Spades or Clubs).
    #[must_use]
    pub const fn is_black(&self) -> bool {
        !self.suit.is_red()
    }

    /// Returns whether the card is a Jack, Queen, or King.
    #[must_use]
    pub const fn is_face_card(&self) -> bool {
        self.rank.is_face()
    }

    /// Returns the short form of the card, e.g. `"A♥"` or `"10♠"`.
    #[must_use]
    pub fn short_string(&self) -> alloc::string::String {
        alloc::format!("{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Formats the card as `"<rank> of <suit>"`, e.g. `"Ace of Hearts"`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();
