//! Card piles.
//!
//! Tableau columns, stock and waste are all `Pile`s. Only the top of a
//! pile is ever accessible to the rules.

pub mod pile;

pub use pile::Pile;
