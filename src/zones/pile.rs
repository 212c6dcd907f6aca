//! Ordered card piles.
//!
//! A `Pile` is a stack whose last element is the top, the only end cards
//! are taken from or added to. Cards are stored in an `im::Vector` so
//! cloning a pile for a history snapshot shares structure instead of
//! copying every card.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// An ordered stack of cards (index 0 = bottom, last = top).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pile from cards listed bottom to top, keeping their facing.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Build a pile with every card turned face-down.
    pub fn face_down(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards
                .into_iter()
                .map(|mut card| {
                    card.hidden = true;
                    card
                })
                .collect(),
        }
    }

    /// Remove and return the top card, turning it face-up.
    ///
    /// Returns `None` if the pile is empty.
    pub fn draw(&mut self) -> Option<Card> {
        let mut card = self.cards.pop_back()?;
        card.hidden = false;
        Some(card)
    }

    /// Look at the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Put a card on top. Legality is the caller's concern.
    pub fn place(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pile has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Card at `index` counted from the bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }
}
