//! The 52-card deck used to deal a game.

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// A standard deck, consumed from the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// One face-up card per (suit, rank), suit-major.
    #[must_use]
    pub fn new() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// Uniformly permute the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Take up to `n` cards off the end, in the order they come off.
    ///
    /// Returns fewer than `n` when the deck runs short.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let split = self.cards.len() - take;
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        drawn
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_new_deck_is_complete() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: FxHashSet<_> = deck.remaining().iter().map(|c| (c.suit, c.rank)).collect();
        assert_eq!(unique.len(), 52);
        assert!(deck.remaining().iter().all(|c| !c.hidden));
    }

    #[test]
    fn test_draw_pops_from_end() {
        let mut deck = Deck::new();
        let drawn = deck.draw(2);

        // Last built card is the King of Diamonds.
        assert_eq!(drawn[0], Card::new(Suit::Diamonds, Rank::King));
        assert_eq!(drawn[1], Card::new(Suit::Diamonds, Rank::Queen));
        assert_eq!(deck.len(), 50);
    }

    #[test]
    fn test_draw_more_than_remaining() {
        let mut deck = Deck::new();
        deck.draw(50);

        let rest = deck.draw(5);
        assert_eq!(rest.len(), 2);
        assert!(deck.is_empty());
        assert!(deck.draw(1).is_empty());
    }

    #[test]
    fn test_shuffle_preserves_cards() {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(42);
        deck.shuffle(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        assert_ne!(deck, Deck::new());

        let mut shuffled = deck.remaining().to_vec();
        shuffled.sort_by_key(|c| (c.suit, c.rank));
        let mut fresh = Deck::new().remaining().to_vec();
        fresh.sort_by_key(|c| (c.suit, c.rank));
        assert_eq!(shuffled, fresh);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle(&mut GameRng::new(5));
        b.shuffle(&mut GameRng::new(5));
        assert_eq!(a, b);
    }
}
