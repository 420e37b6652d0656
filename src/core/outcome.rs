//! Round outcomes and winner determination.

use serde::{Deserialize, Serialize};

use super::choice::Choice;

/// Result of a single resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The player's choice won.
    Player,
    /// The computer's choice won.
    Computer,
    /// Both sides picked the same choice.
    Tie,
}

impl Outcome {
    /// Determine the winner of a round.
    ///
    /// Total on the full 3×3 input space: tie iff the choices are equal,
    /// otherwise the player wins iff their choice beats the computer's.
    ///
    /// ```
    /// use rps_engine::core::{Choice, Outcome};
    ///
    /// assert_eq!(Outcome::of(Choice::Rock, Choice::Scissors), Outcome::Player);
    /// assert_eq!(Outcome::of(Choice::Rock, Choice::Paper), Outcome::Computer);
    /// assert_eq!(Outcome::of(Choice::Rock, Choice::Rock), Outcome::Tie);
    /// ```
    #[must_use]
    pub fn of(player: Choice, computer: Choice) -> Outcome {
        if player == computer {
            Outcome::Tie
        } else if player.beats() == computer {
            Outcome::Player
        } else {
            Outcome::Computer
        }
    }

    /// Check if this outcome is a player win.
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Outcome::Player
    }
}
