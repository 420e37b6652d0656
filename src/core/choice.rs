//! Weapon choices and the beats-relation.
//!
//! ## Choice
//!
//! One of the fixed three-element set {Rock, Paper, Scissors}. Each choice
//! carries a display name, an icon glyph, and defeats exactly one other
//! choice.
//!
//! ## Beats-relation
//!
//! Rock beats scissors beats paper beats rock. The relation is a 3-cycle:
//! total, irreflexive, and antisymmetric per pair.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A weapon choice.
///
/// The set is closed: every input that names a choice must resolve to one of
/// these three variants or fail fast (see [`Choice::from_str`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices, in canonical order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }

    /// Icon glyph shown on the display surface.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Choice::Rock => "🗿",
            Choice::Paper => "📄",
            Choice::Scissors => "✂️",
        }
    }

    /// The choice this one defeats.
    ///
    /// ```
    /// use rps_engine::core::Choice;
    ///
    /// assert_eq!(Choice::Rock.beats(), Choice::Scissors);
    /// assert_eq!(Choice::Paper.beats(), Choice::Rock);
    /// assert_eq!(Choice::Scissors.beats(), Choice::Paper);
    /// ```
    #[must_use]
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// Lowercase identifier used by the persistence format and input events.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an identifier outside the closed choice set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceParseError {
    /// The rejected identifier.
    pub input: String,
}

impl std::fmt::Display for ChoiceParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized choice: {:?}", self.input)
    }
}

impl std::error::Error for ChoiceParseError {}

impl FromStr for Choice {
    type Err = ChoiceParseError;

    /// Parse a lowercase identifier (`rock`, `paper`, `scissors`).
    ///
    /// Unrecognized identifiers are rejected rather than silently ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            other => Err(ChoiceParseError {
                input: other.to_string(),
            }),
        }
    }
}
