//! Engine error taxonomy.
//!
//! Every expected failure of a game operation is reported as a
//! `GolfError` value. None of them leave the state partially mutated.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// Which pile an operation found empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Face-down reserve.
    Stock,
    /// Face-up discard target.
    Waste,
    /// Tableau column (0-based).
    Tableau(usize),
}

impl std::fmt::Display for PileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileKind::Stock => write!(f, "stock pile"),
            PileKind::Waste => write!(f, "waste pile"),
            PileKind::Tableau(column) => write!(f, "tableau column {}", column.saturating_add(1)),
        }
    }
}

/// Errors returned by `GameState` operations and configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GolfError {
    /// Attempted to take a card from an empty pile.
    EmptyPile(PileKind),
    /// The card's rank is not adjacent to the waste top.
    IllegalMove {
        /// Rank of the card being played.
        card: Rank,
        /// Rank of the current waste top.
        target: Rank,
    },
    /// Only the initial snapshot remains.
    NothingToUndo,
    /// No undone snapshot is waiting to be re-applied.
    NothingToRedo,
    /// Column index outside `0..columns`.
    InvalidSelector {
        /// The rejected index.
        index: usize,
        /// Number of tableau columns in this game.
        columns: usize,
    },
    /// A held card is no longer the top of the column it came from.
    HeldCardStale {
        /// Origin column of the held card.
        column: usize,
    },
    /// The layout cannot be dealt from a single deck.
    InvalidConfig(String),
}

impl std::fmt::Display for GolfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GolfError::EmptyPile(PileKind::Stock) => write!(f, "No more cards on the stockpile"),
            GolfError::EmptyPile(PileKind::Waste) => write!(f, "No cards on wastepile"),
            GolfError::EmptyPile(PileKind::Tableau(_)) => write!(f, "No cards on selected pile"),
            GolfError::IllegalMove { card, target } => {
                write!(f, "Move not allowed! {} vs. {}", target, card)
            }
            GolfError::NothingToUndo => write!(f, "No previous moves to undo!"),
            GolfError::NothingToRedo => write!(f, "No undone moves to redo!"),
            GolfError::InvalidSelector { index, columns } => {
                write!(f, "Column {} is out of range (game has {} columns)", index.saturating_add(1), columns)
            }
            GolfError::HeldCardStale { column } => {
                write!(f, "Held card is no longer on top of column {}", column.saturating_add(1))
            }
            GolfError::InvalidConfig(reason) => write!(f, "Invalid game configuration: {}", reason),
        }
    }
}

impl std::error::Error for GolfError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_names_both_ranks() {
        let err = GolfError::IllegalMove {
            card: Rank::Seven,
            target: Rank::Queen,
        };
        assert_eq!(err.to_string(), "Move not allowed! Q vs. 7");
    }

    #[test]
    fn test_empty_pile_messages() {
        assert_eq!(
            GolfError::EmptyPile(PileKind::Stock).to_string(),
            "No more cards on the stockpile"
        );
        assert_eq!(
            GolfError::EmptyPile(PileKind::Tableau(3)).to_string(),
            "No cards on selected pile"
        );
    }

    #[test]
    fn test_pile_kind_display_is_one_based() {
        assert_eq!(PileKind::Tableau(0).to_string(), "tableau column 1");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(GolfError::NothingToUndo);
        assert_eq!(err.to_string(), "No previous moves to undo!");
    }
}
