//! Terminal front end.
//!
//! A `Session` owns the active `GameState` and maps line commands onto
//! engine operations. The renderer turns a state into the text board.
//! Players type 1-based columns; the parser converts them to the
//! engine's 0-based indices.

pub mod command;
pub mod driver;
pub mod render;

pub use command::{Command, ParseError, HELP};
pub use render::{render, status_line};
pub use driver::Session;
