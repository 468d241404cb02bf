//! Players and the cells they occupy.
//!
//! ## Player
//!
//! The two sides, `X` and `O`, with a total `opponent` mapping.
//!
//! ## Cell
//!
//! Tri-state board position: empty, or holding one player's mark.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Both players, `X` first.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Get the opposing player.
    ///
    /// ```
    /// use tictactoe_engine::core::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Contents of a single board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player holding this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Occupied(player) => write!(f, "{player}"),
        }
    }
}
