//! Deterministic dice rolling.
//!
//! The die is the engine's only source of non-determinism, so it is a
//! first-class value the caller supplies rather than a hidden global:
//!
//! - **Deterministic**: the same seed produces the same roll sequence,
//!   which makes full-game replays and test scenarios reproducible.
//! - **Serializable**: `DiceRngState` captures the stream position in O(1)
//!   so a session can park its die alongside its game state.
//!
//! ```
//! use ludo_engine::core::DiceRng;
//!
//! let mut dice = DiceRng::new(42);
//! let roll = dice.roll();
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same sequence.
//! let mut replay = DiceRng::new(42);
//! assert_eq!(replay.roll(), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic six-sided die.
///
/// Uses ChaCha8 for speed with high-quality randomness.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a die seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Roll the die: uniform draw in 1..=6.
    pub fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Capture the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore a die from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable die state.
///
/// Stores the ChaCha8 word position rather than the draw history, so capture
/// and restore are O(1) no matter how many rolls have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
