//! Core engine types: players, cells, board, game state, RNG, errors.
//!
//! Everything a presentation layer needs to track and query a game lives
//! here. Move selection builds on these types in `ai`.

pub mod board;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, EmptyIndices};
pub use error::MoveError;
pub use player::{Cell, Player};
pub use rng::{GameRng, RandomSource};
pub use state::GameState;
