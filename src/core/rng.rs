//! Deterministic random number generation for board setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Forkable**: A registry hands each new session its own branch
//! - **Entropy fallback**: Unseeded sessions draw from the OS
//!
//! ```
//! use codenames_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut session_rng = rng.fork();
//!
//! // Forks are deterministic: the same parent produces the same children
//! let mut rng2 = GameRng::new(42);
//! let mut session_rng2 = rng2.fork();
//! assert_eq!(session_rng.gen_range_usize(0..1000), session_rng2.gen_range_usize(0..1000));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::team::Team;

/// Seeded RNG backing every random decision a session makes.
///
/// Uses ChaCha8 so that word samples and key shuffles are reproducible
/// across platforms for a given seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG from a seed drawn from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// Create from an optional seed, falling back to entropy.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Pick a team uniformly at random.
    pub fn gen_team(&mut self) -> Team {
        if self.inner.gen_bool(0.5) {
            Team::Red
        } else {
            Team::Blue
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Sample `amount` distinct elements without replacement.
    ///
    /// Returns fewer elements if the slice is shorter than `amount`.
    pub fn sample<'a, T>(&mut self, slice: &'a [T], amount: usize) -> Vec<&'a T> {
        slice.choose_multiple(&mut self.inner, amount).collect()
    }
}
