//! Golf rules.
//!
//! - Which moves are legal in a position
//! - Win/loss conditions
//!
//! `GameState` calls into these; they only read the position.

pub mod engine;

pub use engine::{evaluate, legal_moves, playable_columns, GameStatus, Move};
