//! Running game statistics.
//!
//! ## GameStats
//!
//! Six non-negative tallies updated after every round:
//! - `games_played == wins + losses + ties` after every update
//! - `current_streak` counts consecutive player wins; any loss zeroes it,
//!   ties leave it unchanged
//! - `best_streak` is the running maximum of `current_streak` and never
//!   decreases
//!
//! Serialized field names match the persisted blob format
//! (`gamesPlayed`, `currentStreak`, ...), so records written by earlier
//! versions of the game load unchanged.

use serde::{Deserialize, Serialize};

use super::outcome::Outcome;

/// Running statistics for a player's session history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    /// Total rounds resolved.
    pub games_played: u32,
    /// Rounds won by the player.
    pub wins: u32,
    /// Rounds won by the computer.
    pub losses: u32,
    /// Rounds where both sides picked the same choice.
    pub ties: u32,
    /// Consecutive player wins, reset by a loss.
    pub current_streak: u32,
    /// Highest `current_streak` ever observed.
    pub best_streak: u32,
}

impl GameStats {
    /// Create all-zero statistics (the first-run default).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one round's outcome.
    ///
    /// `games_played` always increments. A player win bumps the streak and
    /// the best-streak watermark; a loss zeroes the streak; a tie changes
    /// neither streak field.
    pub fn record(&mut self, outcome: Outcome) {
        self.games_played += 1;

        match outcome {
            Outcome::Player => {
                self.wins += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            Outcome::Computer => {
                self.losses += 1;
                self.current_streak = 0;
            }
            Outcome::Tie => {
                self.ties += 1;
            }
        }
    }

    /// Integer win percentage, rounded to the nearest whole percent.
    ///
    /// Returns 0 when no games have been played.
    ///
    /// ```
    /// use rps_engine::core::{GameStats, Outcome};
    ///
    /// let mut stats = GameStats::new();
    /// assert_eq!(stats.win_rate(), 0);
    ///
    /// stats.record(Outcome::Player);
    /// stats.record(Outcome::Computer);
    /// stats.record(Outcome::Tie);
    /// assert_eq!(stats.win_rate(), 33);
    /// ```
    #[must_use]
    pub fn win_rate(&self) -> u8 {
        if self.games_played == 0 {
            0
        } else {
            let rate = 100.0 * f64::from(self.wins) / f64::from(self.games_played);
            rate.round() as u8
        }
    }

    /// Win rate as a fill proportion in `[0.0, 1.0]` for meter displays.
    #[must_use]
    pub fn win_rate_fill(&self) -> f32 {
        f32::from(self.win_rate()) / 100.0
    }

    /// Check the structural invariants.
    ///
    /// Used by the storage layer to reject records that parsed as JSON but
    /// could not have been produced by [`GameStats::record`].
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let sum = self
            .wins
            .checked_add(self.losses)
            .and_then(|s| s.checked_add(self.ties));

        sum == Some(self.games_played) && self.best_streak >= self.current_streak
    }
}
