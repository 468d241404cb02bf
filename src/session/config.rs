//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::ai::AiConfig;
use crate::core::Player;

/// Who fills the second seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Human against the computer; the human moves first.
    #[default]
    VsComputer,
    /// Two humans sharing the board.
    TwoPlayer,
}

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub mode: Mode,

    /// Player who moves first in every new game.
    pub starting_player: Player,

    /// Computer opponent settings (unused in two-player mode).
    pub ai: AiConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::VsComputer,
            starting_player: Player::X,
            ai: AiConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    pub fn with_ai(mut self, ai: AiConfig) -> Self {
        self.ai = ai;
        self
    }
}
