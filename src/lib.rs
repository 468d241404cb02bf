//! # tictactoe-engine
//!
//! A two-player tic-tac-toe rules engine with an embedded computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Caller-checked moves**: `play` trusts its caller. Legality is queried
//!    first (`is_empty`, `has_not_ended`); violations panic. A checked
//!    `try_play` exists for untrusted input.
//!
//! 2. **O(1) win detection**: After a move only the 2 to 4 lines through the
//!    played cell are inspected.
//!
//! 3. **In-place search**: Minimax applies and exactly undoes moves on one
//!    state instead of cloning per node.
//!
//! 4. **Injected randomness**: Easy and medium play draw from a
//!    `RandomSource`, so every choice can be reproduced.
//!
//! ## Modules
//!
//! - `core`: Players, cells, board, game state, RNG, errors
//! - `rules`: Winning lines, completed-line set, game result
//! - `ai`: Difficulty tiers, heuristic, minimax, computer player
//! - `session`: Turn sequencing for a presentation layer

pub mod ai;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameRng, GameState, MoveError, Player, RandomSource};

pub use crate::rules::{lines_through, GameResult, Line, WinningLine, LINES};

pub use crate::ai::{AiConfig, ComputerPlayer, Difficulty, Minimax, ParseDifficultyError, SearchStats};

pub use crate::session::{Mode, Session, SessionConfig, Status, Turn};
