//! Move selection for the computer opponent.
//!
//! ## Overview
//!
//! Three strengths, selected by [`Difficulty`]:
//!
//! - **Easy**: uniformly random empty cell
//! - **Medium**: one-ply [`heuristic`] over the lines through each cell,
//!   randomized tie-break
//! - **Hard**: exhaustive [`Minimax`] with alpha-beta pruning, lowest-index
//!   tie-break
//!
//! Randomness is injected through [`RandomSource`](crate::core::RandomSource)
//! so tests can script exact choices.
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_engine::ai::{AiConfig, ComputerPlayer, Difficulty};
//! use tictactoe_engine::core::{GameState, Player};
//!
//! let mut state = GameState::new(Player::X);
//! state.play(0);
//!
//! let mut computer = ComputerPlayer::new(AiConfig::default().with_difficulty(Difficulty::Hard));
//! if let Some(index) = computer.choose_move(&mut state) {
//!     state.play(index);
//! }
//! assert_eq!(state.turns(), 2);
//! ```

pub mod config;
pub mod difficulty;
pub mod heuristic;
pub mod minimax;
pub mod player;
pub mod stats;
pub mod strategy;

pub use config::AiConfig;
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use minimax::Minimax;
pub use player::ComputerPlayer;
pub use stats::SearchStats;
pub use strategy::{heuristic_move, random_move};

/// First item with the greatest key; later equal keys never replace it.
pub(crate) fn first_max_by_key<I, K, F>(items: I, mut key: F) -> Option<usize>
where
    I: IntoIterator<Item = usize>,
    K: Ord,
    F: FnMut(usize) -> K,
{
    let mut iter = items.into_iter();
    let first = iter.next()?;
    let mut best = (first, key(first));
    for item in iter {
        let value = key(item);
        if value > best.1 {
            best = (item, value);
        }
    }
    Some(best.0)
}
