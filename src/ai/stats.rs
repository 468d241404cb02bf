//! Minimax search statistics for diagnostics and benchmarking.

use serde::{Deserialize, Serialize};

/// Statistics collected during a hard-difficulty search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Root moves evaluated.
    pub root_moves: u32,

    /// Positions visited (every simulated move counts once).
    pub nodes: u64,

    /// Visited positions that ended the game.
    pub terminal_nodes: u64,

    /// Sibling loops cut short by the alpha-beta bound.
    pub cutoffs: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
