//! Line commands understood by the terminal front end.
//!
//! ```
//! use golf_solitaire::session::Command;
//!
//! assert_eq!("d 3".parse::<Command>(), Ok(Command::Draw(2)));
//! assert_eq!(" S ".parse::<Command>(), Ok(Command::Stock));
//! assert!("D 0".parse::<Command>().is_err());
//! ```

use std::str::FromStr;

/// Help text listing every command.
pub const HELP: &[&str] = &[
    "List of commands",
    "D [1-7]: Draw the top card from said pile",
    "S:       Draw a card from the stock pile",
    "H:       List all commands",
    "U:       Undo last move",
    "X:       Exit the program",
    "R:       Restart game",
];

/// A parsed user command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `D <n>`: play the top of a column onto the waste.
    ///
    /// Holds the 0-based index; the player types `n` counting from 1.
    Draw(usize),
    /// `S`: draw from the stock.
    Stock,
    /// `H`: show help.
    Help,
    /// `U`: undo.
    Undo,
    /// `X`: leave the session.
    Exit,
    /// `R`: deal a new game.
    Restart,
}

/// Why a line could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not match any command.
    InvalidFormat(String),
    /// `D` with a missing, zero or non-numeric column.
    InvalidColumn(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidFormat(line) => {
                write!(f, "ERROR: Invalid command format: '{}'", line)
            }
            ParseError::InvalidColumn(line) => {
                write!(f, "ERROR: '{}' does not name a column", line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let mut words = trimmed.split_whitespace();
        let verb = words.next().map(str::to_ascii_uppercase);
        let arg = words.next();

        if words.next().is_some() {
            return Err(ParseError::InvalidFormat(trimmed.to_string()));
        }

        match (verb.as_deref(), arg) {
            (Some("D"), Some(column)) => match column.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Command::Draw(n - 1)),
                _ => Err(ParseError::InvalidColumn(trimmed.to_string())),
            },
            (Some("D"), None) => Err(ParseError::InvalidColumn(trimmed.to_string())),
            (Some("S"), None) => Ok(Command::Stock),
            (Some("H"), None) => Ok(Command::Help),
            (Some("U"), None) => Ok(Command::Undo),
            (Some("X"), None) => Ok(Command::Exit),
            (Some("R"), None) => Ok(Command::Restart),
            _ => Err(ParseError::InvalidFormat(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_commands() {
        assert_eq!("S".parse(), Ok(Command::Stock));
        assert_eq!("h".parse(), Ok(Command::Help));
        assert_eq!("U".parse(), Ok(Command::Undo));
        assert_eq!("x".parse(), Ok(Command::Exit));
        assert_eq!("R\n".parse(), Ok(Command::Restart));
    }

    #[test]
    fn test_draw_command() {
        assert_eq!("D 1".parse(), Ok(Command::Draw(0)));
        assert_eq!("d   7".parse(), Ok(Command::Draw(6)));
    }

    #[test]
    fn test_draw_requires_positive_column() {
        assert!(matches!("D".parse::<Command>(), Err(ParseError::InvalidColumn(_))));
        assert!(matches!("D 0".parse::<Command>(), Err(ParseError::InvalidColumn(_))));
        assert!(matches!("D x".parse::<Command>(), Err(ParseError::InvalidColumn(_))));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(
            "play".parse::<Command>(),
            Err(ParseError::InvalidFormat("play".to_string()))
        );
        assert!("".parse::<Command>().is_err());
        assert!("S 2".parse::<Command>().is_err());
        assert!("D 1 2".parse::<Command>().is_err());
    }

    #[test]
    fn test_error_message() {
        let err = "zz".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "ERROR: Invalid command format: 'zz'");
    }
}
