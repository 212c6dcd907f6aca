//! Playing cards and the adjacency rule.
//!
//! A `Card` is a (suit, rank) identity plus a per-instance hidden flag.
//! Two cards may be stacked on each other when their ranks are one step
//! apart on the circular sequence A, 2, .., 10, J, Q, K, so Ace and King
//! are neighbours.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Clubs,
    Spades,
    Diamonds,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Spades, Suit::Diamonds];

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♡',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Diamonds => '♢',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, ordered Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Position in the rank sequence (Ace = 0, King = 12).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short label: "A", "2" .. "10", "J", "Q", "K".
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Whether two ranks are one step apart, with Ace and King wrapping.
    #[must_use]
    pub fn is_adjacent(self, other: Rank) -> bool {
        let (a, b) = (self.index(), other.index());
        a.abs_diff(b) == 1 || a.abs_diff(b) == Rank::ALL.len() - 1
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A physical card.
///
/// Equality compares the hidden flag too, so restored snapshots can be
/// checked card-for-card. Use `same_identity` to ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    /// Is this card face-down?
    pub hidden: bool,
}

impl Card {
    /// Create a face-up card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            hidden: false,
        }
    }

    /// Create a face-down card.
    #[must_use]
    pub const fn face_down(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            hidden: true,
        }
    }

    /// Same suit and rank, regardless of facing.
    #[must_use]
    pub fn same_identity(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Whether this card may be stacked on `other` (and vice versa).
    #[must_use]
    pub fn can_place_on(&self, other: &Card) -> bool {
        self.rank.is_adjacent(other.rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.hidden {
            write!(f, "[**]")
        } else {
            write!(f, "[{}{}]", self.rank, self.suit)
        }
    }
}
