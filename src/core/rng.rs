//! Deterministic random number generation for the opponent draw.
//!
//! ## Key Features
//!
//! - **Deterministic**: the same seed produces an identical draw sequence,
//!   which keeps session tests reproducible
//! - **Serializable**: O(1) state capture and restore via the ChaCha8 word
//!   position
//!
//! Uses ChaCha8 for speed while maintaining cryptographic quality
//! randomness.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::choice::Choice;

/// Deterministic RNG behind the computer's choice.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Draw a choice uniformly at random from the three-element set.
    pub fn draw_choice(&mut self) -> Choice {
        // ALL is non-empty, so choose cannot return None.
        *Choice::ALL
            .choose(&mut self.inner)
            .unwrap_or(&Choice::Rock)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Source of opponent draws.
///
/// The session controller draws through this trait so tests can script the
/// opponent. The production implementation is [`GameRng`], which draws
/// uniformly.
pub trait ChoiceSource {
    fn draw(&mut self) -> Choice;
}

impl ChoiceSource for GameRng {
    fn draw(&mut self) -> Choice {
        self.draw_choice()
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of how
/// many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
