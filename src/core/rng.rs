//! Deterministic random number generation for move selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: Move selection only sees the [`RandomSource`] capability,
//!   so tests can script exact choices
//!
//! ## Usage
//!
//! ```
//! use tictactoe_engine::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//!
//! assert_eq!(rng.gen_index(9), again.gen_index(9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness consumed by the easy and medium strategies.
///
/// Implement this to drive move selection deterministically.
pub trait RandomSource {
    /// Pick a uniformly random index in `0..len`.
    ///
    /// Only called with `len > 0`.
    fn gen_index(&mut self, len: usize) -> usize;

    /// Shuffle candidate cell indices in place.
    fn shuffle(&mut self, indices: &mut [usize]);
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn shuffle(&mut self, indices: &mut [usize]) {
        use rand::seq::SliceRandom;
        indices.shuffle(&mut self.inner);
    }
}
