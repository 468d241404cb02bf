//! Turn-sequence driver for a presentation layer.
//!
//! A [`Session`] owns the current game and, in player-vs-computer mode, the
//! computer opponent. Each human action is one call to [`Session::play`],
//! which also applies the computer's reply, so moves are always serialized.
//!
//! ```
//! use tictactoe_engine::session::{Session, SessionConfig, Status};
//!
//! let mut session = Session::new(SessionConfig::default());
//! let turn = session.play(4).unwrap();
//!
//! assert!(turn.computer.is_some());
//! assert!(matches!(turn.status, Status::InProgress { .. }));
//! ```

mod config;

pub use config::{Mode, SessionConfig};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::{ComputerPlayer, Difficulty};
use crate::core::{GameState, MoveError, Player};
use crate::rules::GameResult;

/// Where the current game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress { to_move: Player },
    Won { winner: Player },
    Draw,
}

impl Status {
    #[must_use]
    pub fn of(game: &GameState) -> Self {
        match game.result() {
            None => Status::InProgress {
                to_move: game.current_player(),
            },
            Some(GameResult::Winner(winner)) => Status::Won { winner },
            Some(GameResult::Draw) => Status::Draw,
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }
}

/// Moves applied by one [`Session::play`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Cell the human marked.
    pub human: usize,
    /// Computer's reply, if it moved.
    pub computer: Option<usize>,
    /// Status after both moves.
    pub status: Status,
}

/// One logical sequence of games.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    game: GameState,
    computer: ComputerPlayer,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let computer = ComputerPlayer::new(config.ai.clone());
        let game = GameState::new(config.starting_player);
        Self {
            config,
            game,
            computer,
        }
    }

    /// Read-only view of the current game.
    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> Status {
        Status::of(&self.game)
    }

    /// Apply a human move, then the computer's reply in player-vs-computer
    /// mode. Nothing changes if the move is rejected.
    pub fn play(&mut self, index: usize) -> Result<Turn, MoveError> {
        self.game.try_play(index)?;

        let computer = if self.config.mode == Mode::VsComputer && self.game.has_not_ended() {
            let reply = self.computer.choose_move(&mut self.game);
            if let Some(reply) = reply {
                self.game.play(reply);
            }
            reply
        } else {
            None
        };

        Ok(Turn {
            human: index,
            computer,
            status: self.status(),
        })
    }

    /// Replace the game with a fresh one.
    ///
    /// Returns `false` without replacing when no move has been made yet.
    pub fn reset(&mut self) -> bool {
        if self.game.is_first_turn() {
            return false;
        }
        self.new_game();
        true
    }

    /// Change the computer's strength and start a new game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.ai.difficulty = difficulty;
        self.computer.set_difficulty(difficulty);
        self.new_game();
    }

    /// Change the mode and start a new game.
    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
        self.new_game();
    }

    fn new_game(&mut self) {
        debug!(mode = ?self.config.mode, difficulty = %self.config.ai.difficulty, "new game");
        self.game = GameState::new(self.config.starting_player);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
