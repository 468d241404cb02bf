//! A configured computer opponent.

use tracing::debug;

use crate::core::{GameRng, GameState};

use super::config::AiConfig;
use super::difficulty::Difficulty;
use super::minimax::Minimax;
use super::stats::SearchStats;
use super::strategy::{heuristic_move, random_move};

/// Computer player owning its configuration, RNG and search context.
#[derive(Clone, Debug)]
pub struct ComputerPlayer {
    config: AiConfig,
    rng: GameRng,
    minimax: Minimax,
}

impl ComputerPlayer {
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Self {
            config,
            rng,
            minimax: Minimax::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Statistics of the last hard-difficulty search.
    #[must_use]
    pub fn last_search(&self) -> &SearchStats {
        self.minimax.stats()
    }

    /// Choose a move for the player to move, `None` once the game has ended.
    pub fn choose_move(&mut self, state: &mut GameState) -> Option<usize> {
        let difficulty = self.config.difficulty;
        let choice = match difficulty {
            Difficulty::Easy => random_move(state, &mut self.rng),
            Difficulty::Medium => heuristic_move(state, &mut self.rng),
            Difficulty::Hard => self.minimax.best_move(state),
        };

        if let Some(index) = choice {
            if difficulty == Difficulty::Hard {
                let stats = self.minimax.stats();
                debug!(
                    %difficulty,
                    index,
                    player = %state.current_player(),
                    nodes = stats.nodes,
                    cutoffs = stats.cutoffs,
                    time_us = stats.time_us,
                    nodes_per_second = stats.nodes_per_second(),
                    "computer move"
                );
            } else {
                debug!(%difficulty, index, player = %state.current_player(), "computer move");
            }
        }
        choice
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}
