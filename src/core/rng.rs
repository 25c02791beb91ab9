//! Deterministic random number generation for game setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Instance-owned**: Each game is built from its own `GameRng`; there is
//!   no process-wide generator
//! - **Context streams**: Independent sequences for different purposes
//!   (category choice, word sampling, board order)
//!
//! ## Usage
//!
//! ```
//! use connections::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Separate streams never disturb each other
//! let mut words = rng.for_context("words");
//! let mut board = rng.for_context("board");
//!
//! let mut cells = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! board.shuffle(&mut cells);
//! let _ = words.gen_range_usize(0..10);
//!
//! // Same seed and context = same stream
//! let mut again = GameRng::new(42).for_context("board");
//! let mut replay = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! again.shuffle(&mut replay);
//! assert_eq!(cells, replay);
//! ```

use std::hash::{Hash, Hasher};

use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Deterministic RNG used while building a game.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
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

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// regardless of how much the parent has been advanced.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        // FxHasher has no per-process keys, so streams are stable across runs.
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Pick `amount` distinct indices out of `0..len`, in random order.
    ///
    /// Returns `None` if `amount > len`.
    #[must_use]
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Option<Vec<usize>> {
        if amount > len {
            return None;
        }
        let mut picked = index::sample(&mut self.inner, len, amount).into_vec();
        // index::sample does not promise a shuffled order for every algorithm.
        picked.shuffle(&mut self.inner);
        Some(picked)
    }
}
