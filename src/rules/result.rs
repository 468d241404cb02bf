//! Final outcome of a game.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Full board, no completed line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}
