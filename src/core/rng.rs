//! Deterministic deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed and same word list produce the same deck
//! - **Non-destructive**: `shuffled` works on a copy, the caller's list is untouched
//! - **Serializable**: O(1) state capture and restore for snapshots
//!
//! ```
//! use alias_engine::core::DeckRng;
//!
//! let words = vec!["apple", "river", "violin", "castle"];
//!
//! let mut rng1 = DeckRng::new(7);
//! let mut rng2 = DeckRng::new(7);
//!
//! assert_eq!(rng1.shuffled(&words), rng2.shuffled(&words));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable RNG that owns every shuffle a game performs.
///
/// Uses ChaCha8 so a game restored from a snapshot keeps producing the
/// same decks it would have produced without the round trip.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
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
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in `0..=max`.
    pub fn gen_index(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Fisher–Yates shuffle in place.
    ///
    /// Walks from the last slot down to 1, swapping each slot with a
    /// uniformly chosen slot at or below it. Every permutation is equally
    /// likely.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.gen_index(i);
            items.swap(i, j);
        }
    }

    /// Return a shuffled copy of `items`, leaving the input untouched.
    #[must_use]
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut result = items.to_vec();
        self.shuffle(&mut result);
        result
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DeckRngState {
        DeckRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DeckRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for snapshots.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many shuffles have been performed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
