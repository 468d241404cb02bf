//! One-ply line heuristic used by the medium tier.
//!
//! Each line through the candidate cell is scored from the mover's marks
//! and the opponent's marks on it, counting the candidate mark itself:
//!
//! | mover | opponent | score |
//! |-------|----------|-------|
//! | 3     | 0        | 100   |
//! | 1     | 2        | 10    |
//! | 2     | 0        | 1     |
//! | other | other    | 0     |
//!
//! The candidate's score is the sum over its lines.

use crate::core::{GameState, Player};
use crate::rules::{lines_through, Line};

/// Completes a line.
pub const WIN_SCORE: i32 = 100;

/// Lands on a line already holding two opponent marks.
pub const BLOCK_SCORE: i32 = 10;

/// Second mark on an otherwise empty line.
pub const BUILD_SCORE: i32 = 1;

/// Heuristic value of the current player marking `index`.
///
/// Panics if the move is not legal.
#[must_use]
pub fn score(state: &GameState, index: usize) -> i32 {
    assert!(state.can_play(index), "Heuristic on illegal move at cell {index}");

    let mover = state.current_player();
    lines_through(index)
        .into_iter()
        .map(|line| line_score(state, line, mover))
        .sum()
}

fn line_score(state: &GameState, line: Line, mover: Player) -> i32 {
    let (own, opponent) = line
        .iter()
        .filter_map(|&i| state.cell(i).player())
        .fold((1, 0), |(own, opponent), player| {
            if player == mover {
                (own + 1, opponent)
            } else {
                (own, opponent + 1)
            }
        });

    match (own, opponent) {
        (3, 0) => WIN_SCORE,
        (1, 2) => BLOCK_SCORE,
        (2, 0) => BUILD_SCORE,
        _ => 0,
    }
}
