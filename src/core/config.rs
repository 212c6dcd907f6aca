//! Game configuration.
//!
//! `GolfConfig` describes how a game is dealt and a couple of behaviour
//! knobs. The default is the classic layout: seven columns of five,
//! sixteen cards in the stock and one on the waste, which partitions the
//! full 52-card deck.

use serde::{Deserialize, Serialize};

use super::error::GolfError;
use crate::cards::DECK_SIZE;

/// Dealing layout and behaviour settings for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GolfConfig {
    /// Number of tableau columns.
    pub columns: usize,

    /// Cards dealt face-up into each column.
    pub column_depth: usize,

    /// Cards dealt face-down into the stock.
    pub stock_size: usize,

    /// Cards dealt face-up onto the waste.
    pub waste_size: usize,

    /// Shuffle seed. `None` draws one from entropy at deal time.
    pub seed: Option<u64>,

    /// Whether an undo with nothing to undo still counts as a move.
    pub charge_empty_undo: bool,
}

impl Default for GolfConfig {
    fn default() -> Self {
        Self {
            columns: 7,
            column_depth: 5,
            stock_size: 16,
            waste_size: 1,
            seed: None,
            charge_empty_undo: true,
        }
    }
}

impl GolfConfig {
    /// Classic 52-card deal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The 15-card stock layout, which leaves one card of the deck undealt.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            stock_size: 15,
            ..Self::default()
        }
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the tableau shape.
    #[must_use]
    pub fn with_tableau(mut self, columns: usize, column_depth: usize) -> Self {
        self.columns = columns;
        self.column_depth = column_depth;
        self
    }

    /// Set the stock size.
    #[must_use]
    pub fn with_stock_size(mut self, size: usize) -> Self {
        self.stock_size = size;
        self
    }

    /// Set the number of cards dealt to the waste.
    #[must_use]
    pub fn with_waste_size(mut self, size: usize) -> Self {
        self.waste_size = size;
        self
    }

    /// Choose whether an empty undo increments the move counter.
    #[must_use]
    pub fn charge_empty_undo(mut self, charge: bool) -> Self {
        self.charge_empty_undo = charge;
        self
    }

    /// Cards placed in play by the deal.
    #[must_use]
    pub fn dealt_cards(&self) -> usize {
        self.columns * self.column_depth + self.stock_size + self.waste_size
    }

    /// Check that this layout can be dealt from one deck.
    pub fn validate(&self) -> Result<(), GolfError> {
        if self.columns == 0 {
            return Err(GolfError::InvalidConfig("at least one column is required".into()));
        }
        if self.waste_size == 0 {
            return Err(GolfError::InvalidConfig("the waste must start with a card".into()));
        }
        let dealt = self.dealt_cards();
        if dealt > DECK_SIZE {
            return Err(GolfError::InvalidConfig(format!(
                "layout needs {} cards but the deck has {}",
                dealt, DECK_SIZE
            )));
        }
        Ok(())
    }
}
