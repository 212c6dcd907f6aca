//! Core engine types: configuration, errors, RNG and the game state.

pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use rng::GameRng;
pub use config::GolfConfig;
pub use error::{GolfError, PileKind};
pub use state::{GameState, HeldCard};
