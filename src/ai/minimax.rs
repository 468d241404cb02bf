//! Exhaustive minimax with alpha-beta pruning.
//!
//! The search runs on the caller's [`GameState`] in place: every simulated
//! move is applied, evaluated and then exactly undone, so no state is cloned
//! per node and the state is unchanged when the search returns.
//!
//! Scores are from the point of view of the player to move at the root
//! (the maximizer): `+1` win, `0` draw, `-1` loss. Each root move is
//! searched with a full window, so root scores are exact; interior scores
//! are clamped to the window passed down.

use std::time::Instant;

use crate::core::{GameState, Player};

use super::first_max_by_key;
use super::stats::SearchStats;

pub const WIN: i32 = 1;
pub const DRAW: i32 = 0;
pub const LOSS: i32 = -1;

/// Running `(maximizer, minimizer)` bounds of a search window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Bounds {
    maximizer: i32,
    minimizer: i32,
}

impl Bounds {
    const FULL: Bounds = Bounds {
        maximizer: i32::MIN,
        minimizer: i32::MAX,
    };

    fn is_cut(self) -> bool {
        self.maximizer >= self.minimizer
    }
}

/// Minimax search context.
///
/// Holds statistics from the most recent search.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the last [`Minimax::best_move`] call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for the player to move, `None` if the game has ended.
    ///
    /// Ties go to the lowest index.
    pub fn best_move(&mut self, state: &mut GameState) -> Option<usize> {
        if !state.has_not_ended() {
            return None;
        }

        let start = Instant::now();
        self.stats.reset();

        let maximizer = state.current_player();
        let best = first_max_by_key(state.empty_indices(), |index| {
            self.stats.root_moves += 1;
            self.search(state, index, maximizer, Bounds::FULL)
        });

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    /// Exact score of the player to move marking `index`.
    ///
    /// Panics if the move is not legal.
    pub fn score_move(&mut self, state: &mut GameState, index: usize) -> i32 {
        assert!(state.can_play(index), "Search on illegal move at cell {index}");
        let maximizer = state.current_player();
        self.search(state, index, maximizer, Bounds::FULL)
    }

    fn search(&mut self, state: &mut GameState, index: usize, maximizer: Player, mut bounds: Bounds) -> i32 {
        self.stats.nodes += 1;
        state.apply_move(index);

        let score = if !state.has_not_ended() {
            self.stats.terminal_nodes += 1;
            terminal_score(state, maximizer)
        } else {
            let maximizing = state.current_player() == maximizer;
            for next in state.empty_indices() {
                if bounds.is_cut() {
                    self.stats.cutoffs += 1;
                    break;
                }
                let next_score = self.search(state, next, maximizer, bounds);
                if maximizing {
                    bounds.maximizer = bounds.maximizer.max(next_score);
                } else {
                    bounds.minimizer = bounds.minimizer.min(next_score);
                }
            }
            if maximizing {
                bounds.maximizer
            } else {
                bounds.minimizer
            }
        };

        state.undo_move(index);
        score
    }
}

/// Score of an ended game. The player to move is the one who just moved.
fn terminal_score(state: &GameState, maximizer: Player) -> i32 {
    if !state.has_winner() {
        DRAW
    } else if state.current_player() == maximizer {
        WIN
    } else {
        LOSS
    }
}
