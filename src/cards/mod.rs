//! Cards and the deck.
//!
//! - `Card`: suit, rank and facing, plus the adjacency rule
//! - `Deck`: the 52-card universe, shuffled and drawn from to deal

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
