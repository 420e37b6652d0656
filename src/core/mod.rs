//! Core game types: choices, outcomes, statistics, RNG.
//!
//! These are the pure building blocks; nothing here touches the display
//! surface or the persistent store.

pub mod choice;
pub mod outcome;
pub mod rng;
pub mod stats;

pub use choice::{Choice, ChoiceParseError};
pub use outcome::Outcome;
pub use rng::{ChoiceSource, GameRng, GameRngState};
pub use stats::GameStats;
