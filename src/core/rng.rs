//! Injectable randomness for picking starting words.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical starting words
//! - **Injectable**: Controllers accept any `RandomSource`
//! - **Checkpointable**: O(1) state capture and restore
//!
//! ```
//! use word_chain::core::{RandomSource, SeededRng};
//!
//! let mut rng1 = SeededRng::new(42);
//! let mut rng2 = SeededRng::new(42);
//!
//! assert_eq!(rng1.pick_index(100), rng2.pick_index(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform random indices.
///
/// Implementations must return a value in `0..len`. Callers never pass
/// `len == 0`.
pub trait RandomSource {
    /// Pick an index uniformly from `0..len`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Seeded ChaCha8 random source.
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeededRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread RNG.
    ///
    /// The drawn seed is kept so the session can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> SeededRngState {
        SeededRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &SeededRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for SeededRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of
/// how many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
