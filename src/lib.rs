//! # golf-solitaire
//!
//! Game state engine for Golf Solitaire, with a small terminal front end.
//!
//! Seven tableau columns of face-up cards are cleared by moving column
//! tops onto a waste pile whenever the ranks are one step apart (Ace and
//! King wrap). The waste is refilled from a face-down stock at any time.
//!
//! ## Design Principles
//!
//! 1. **Owned state**: `GameState` owns every pile. Front ends read it
//!    through queries and change it only through its operations.
//!
//! 2. **Errors are values**: Illegal or impossible moves return a
//!    `GolfError` and leave the position untouched.
//!
//! 3. **Cheap snapshots**: Piles are `im` persistent vectors, so every
//!    move records a full snapshot for undo without copying the cards.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG and `GameState`
//! - `cards`: Cards, ranks, suits and the deck
//! - `zones`: Piles
//! - `history`: Undo/redo snapshot stacks
//! - `rules`: Legal moves and win/loss detection
//! - `session`: Command parsing, text rendering and the play session
//!
//! ```
//! use golf_solitaire::{GameState, GameStatus};
//!
//! let mut game = GameState::with_seed(42);
//! while let Some(&mv) = game.legal_moves().first() {
//!     game.apply(mv).unwrap();
//! }
//! assert_ne!(game.status(), GameStatus::Running);
//! assert_eq!(game.total_cards(), 52);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod history;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, GameState, GolfConfig, GolfError, HeldCard, PileKind};

pub use crate::cards::{Card, Deck, Rank, Suit, DECK_SIZE};

pub use crate::zones::Pile;

pub use crate::history::{History, Snapshot};

pub use crate::rules::{GameStatus, Move};

pub use crate::session::{Command, ParseError, Session};
