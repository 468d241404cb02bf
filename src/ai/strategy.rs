//! Move selection for each difficulty tier.

use crate::core::{GameState, RandomSource};

use super::difficulty::Difficulty;
use super::first_max_by_key;
use super::heuristic;
use super::minimax::Minimax;

impl GameState {
    /// Choose a move for the player to move at the given strength.
    ///
    /// Returns `None` once the game has ended. The state is used as scratch
    /// space by the hard search but is identical on return.
    ///
    /// - Easy: uniformly random empty cell.
    /// - Medium: highest [`heuristic::score`], ties broken by shuffling the
    ///   candidates and taking the first maximum.
    /// - Hard: highest minimax score, ties broken by lowest index.
    pub fn best_move<R: RandomSource + ?Sized>(&mut self, difficulty: Difficulty, rng: &mut R) -> Option<usize> {
        match difficulty {
            Difficulty::Easy => random_move(self, rng),
            Difficulty::Medium => heuristic_move(self, rng),
            Difficulty::Hard => Minimax::new().best_move(self),
        }
    }
}

/// Uniformly random empty cell.
pub fn random_move<R: RandomSource + ?Sized>(state: &GameState, rng: &mut R) -> Option<usize> {
    if !state.has_not_ended() {
        return None;
    }
    let empty = state.empty_indices();
    Some(empty[rng.gen_index(empty.len())])
}

/// First maximum of the medium heuristic over shuffled candidates.
pub fn heuristic_move<R: RandomSource + ?Sized>(state: &GameState, rng: &mut R) -> Option<usize> {
    if !state.has_not_ended() {
        return None;
    }
    let mut candidates = state.empty_indices();
    rng.shuffle(&mut candidates);
    first_max_by_key(candidates, |index| heuristic::score(state, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Player};

    /// Picks a fixed position and reverses on shuffle.
    struct Scripted {
        pick: usize,
    }

    impl RandomSource for Scripted {
        fn gen_index(&mut self, len: usize) -> usize {
            self.pick.min(len - 1)
        }

        fn shuffle(&mut self, indices: &mut [usize]) {
            indices.reverse();
        }
    }

    fn play_all(moves: &[usize]) -> GameState {
        let mut state = GameState::new(Player::X);
        for &index in moves {
            state.play(index);
        }
        state
    }

    #[test]
    fn test_easy_uses_injected_source() {
        let mut state = play_all(&[0, 4]);
        let mut rng = Scripted { pick: 2 };
        // Empty cells are 1, 2, 3, 5, 6, 7, 8.
        assert_eq!(state.best_move(Difficulty::Easy, &mut rng), Some(3));
    }

    #[test]
    fn test_medium_tie_break_follows_shuffle() {
        // All cells score zero on an empty board; first after reversal wins.
        let mut state = GameState::default();
        let mut rng = Scripted { pick: 0 };
        assert_eq!(state.best_move(Difficulty::Medium, &mut rng), Some(8));
    }

    #[test]
    fn test_medium_prefers_win_for_any_seed() {
        let mut state = play_all(&[0, 3, 1, 4]);
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            assert_eq!(state.best_move(Difficulty::Medium, &mut rng), Some(2));
        }
    }

    #[test]
    fn test_medium_blocks_for_any_seed() {
        let mut state = play_all(&[0, 4, 1]);
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            assert_eq!(state.best_move(Difficulty::Medium, &mut rng), Some(2));
        }
    }

    #[test]
    fn test_hard_ignores_random_source() {
        let mut state = play_all(&[0]);
        let mut rng = Scripted { pick: 5 };
        assert_eq!(state.best_move(Difficulty::Hard, &mut rng), Some(4));
    }

    #[test]
    fn test_no_move_after_end() {
        let mut state = play_all(&[0, 4, 1, 5, 2]);
        let mut rng = GameRng::new(1);
        for difficulty in Difficulty::ALL {
            assert_eq!(state.best_move(difficulty, &mut rng), None);
        }
    }

    #[test]
    fn test_every_tier_picks_empty_cell() {
        let mut rng = GameRng::new(99);
        for difficulty in Difficulty::ALL {
            let mut state = play_all(&[4, 0, 8]);
            for _ in 0..20 {
                let index = state.best_move(difficulty, &mut rng).unwrap();
                assert!(state.is_empty(index), "{difficulty} picked occupied {index}");
            }
        }
    }
}
