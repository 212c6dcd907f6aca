//! Golf rules: move enumeration and terminal conditions.
//!
//! Status is never stored. It is derived from the piles whenever asked:
//!
//! - `Won` when every tableau column is empty, whatever is left in the
//!   stock or on the waste.
//! - `Lost` when the stock is empty, the waste holds fewer than a full
//!   deck, and no column top is adjacent to the waste top.
//! - `Running` otherwise.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::DECK_SIZE;
use crate::core::state::GameState;

/// Derived game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    Won,
    Lost,
}

impl GameStatus {
    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Running => write!(f, "running"),
            GameStatus::Won => write!(f, "win"),
            GameStatus::Lost => write!(f, "lose"),
        }
    }
}

/// A player move that changes the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Turn the stock top onto the waste.
    DrawStock,
    /// Move the top of a tableau column (0-based) onto the waste.
    PlayColumn(usize),
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::DrawStock => write!(f, "draw from stock"),
            Move::PlayColumn(column) => write!(f, "play column {}", column + 1),
        }
    }
}

/// Columns whose top card can go on the waste right now.
pub fn playable_columns(state: &GameState) -> impl Iterator<Item = usize> + '_ {
    let target = state.waste_top().copied();
    state
        .tableau()
        .iter()
        .enumerate()
        .filter_map(move |(index, pile)| {
            let top = pile.peek()?;
            let target = target.as_ref()?;
            top.can_place_on(target).then_some(index)
        })
}

/// Every move that would currently succeed.
///
/// Column plays come first, left to right, followed by `DrawStock` when
/// the stock has cards.
#[must_use]
pub fn legal_moves(state: &GameState) -> SmallVec<[Move; 8]> {
    let mut moves: SmallVec<[Move; 8]> = playable_columns(state).map(Move::PlayColumn).collect();
    if state.stock_len() > 0 {
        moves.push(Move::DrawStock);
    }
    moves
}

/// Evaluate the status of a position.
#[must_use]
pub fn evaluate(state: &GameState) -> GameStatus {
    if state.tableau().iter().all(|pile| pile.is_empty()) {
        return GameStatus::Won;
    }

    let stuck = state.stock_len() == 0
        && state.waste_len() < DECK_SIZE
        && playable_columns(state).next().is_none();

    if stuck {
        GameStatus::Lost
    } else {
        GameStatus::Running
    }
}
