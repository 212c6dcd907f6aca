//! A play session: the current game plus the command table that drives it.

use super::command::{Command, HELP};
use crate::core::{GameRng, GameState, GolfConfig, GolfError};

/// Owns the active game and turns commands into engine calls.
///
/// Restarting replaces the game wholesale. Seeds for new deals come from
/// the session RNG, so a session started with a fixed seed replays the
/// same sequence of games.
#[derive(Debug)]
pub struct Session {
    config: GolfConfig,
    seeds: GameRng,
    game: GameState,
    running: bool,
}

impl Session {
    /// Start a session and deal the first game.
    pub fn new(config: GolfConfig) -> Result<Self, GolfError> {
        let seeds = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let game = GameState::new(config.clone().with_seed(seeds.seed()))?;
        Ok(Self {
            config,
            seeds,
            game,
            running: true,
        })
    }

    /// The current game.
    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// False once the player has asked to exit.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Throw away the current game and deal a new one.
    pub fn restart(&mut self) -> Result<(), GolfError> {
        let seed = self.seeds.next_seed();
        self.game = GameState::new(self.config.clone().with_seed(seed))?;
        log::info!("session restarted with seed {}", seed);
        Ok(())
    }

    /// Parse a line of input and run it. Returns the message to show.
    pub fn handle_line(&mut self, line: &str) -> String {
        match line.parse::<Command>() {
            Ok(command) => self.dispatch(command),
            Err(err) => err.to_string(),
        }
    }

    /// Run a command. Returns the message to show.
    pub fn dispatch(&mut self, command: Command) -> String {
        let result = match command {
            Command::Draw(column) => self
                .game
                .play_from_tableau(column)
                .map(|_| "Placed card on wastepile".to_string()),
            Command::Stock => self
                .game
                .draw_from_stock()
                .map(|_| "Drew a card from the stockpile".to_string()),
            Command::Help => Ok(HELP.join("\n")),
            Command::Undo => self.game.undo().map(|()| "Undone last move".to_string()),
            Command::Exit => {
                self.running = false;
                Ok("Exiting game".to_string())
            }
            Command::Restart => self.restart().map(|()| "Restart".to_string()),
        };
        result.unwrap_or_else(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(GolfConfig::default().with_seed(42)).unwrap()
    }

    #[test]
    fn test_first_game_uses_configured_seed() {
        let session = session();
        assert_eq!(session.game().seed(), Some(42));
        assert!(session.is_running());
    }

    #[test]
    fn test_stock_command() {
        let mut session = session();
        assert_eq!(session.handle_line("S"), "Drew a card from the stockpile");
        assert_eq!(session.game().moves(), 1);
    }

    #[test]
    fn test_exit_command() {
        let mut session = session();
        assert_eq!(session.handle_line("x"), "Exiting game");
        assert!(!session.is_running());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let mut session = session();
        assert_eq!(
            session.handle_line("jump"),
            "ERROR: Invalid command format: 'jump'"
        );
        assert_eq!(session.game().moves(), 0);
    }

    #[test]
    fn test_column_out_of_range() {
        let mut session = session();
        let message = session.handle_line("D 9");
        assert!(message.contains("out of range"));
        assert_eq!(session.game().moves(), 0);
    }

    #[test]
    fn test_help_lists_commands() {
        let mut session = session();
        let help = session.handle_line("H");
        assert!(help.starts_with("List of commands"));
        assert!(help.contains("R:       Restart game"));
    }
}
