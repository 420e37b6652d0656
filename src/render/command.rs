//! Render instructions emitted by the session controller.
//!
//! Commands are plain data. The presentation layer interprets them however
//! it likes (DOM, terminal, test recorder); the engine doesn't care.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{Choice, GameStats};

/// Which screen is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Weapon selection.
    Welcome,
    /// Round display and statistics.
    Game,
}

/// Category of a result message, mapped to a color by the presentation
/// layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageTone {
    Win,
    Loss,
    Tie,
    Neutral,
}

/// Content of a weapon display slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlyphSlot {
    /// The `?` placeholder shown while a round resolves.
    Placeholder,
    /// A revealed weapon, drawn with its icon glyph.
    Weapon(Choice),
}

impl GlyphSlot {
    /// The glyph a text-based surface would print for this slot.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            GlyphSlot::Placeholder => "?",
            GlyphSlot::Weapon(choice) => choice.icon(),
        }
    }
}

/// Snapshot of the statistics panel.
///
/// Carries the six raw tallies plus the derived display values so the
/// presentation layer never recomputes percentages.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Integer win percentage.
    pub win_rate: u8,
    /// Win-rate meter fill proportion in `[0.0, 1.0]`.
    pub win_rate_fill: f32,
}

impl From<&GameStats> for StatsView {
    fn from(stats: &GameStats) -> Self {
        Self {
            games_played: stats.games_played,
            wins: stats.wins,
            losses: stats.losses,
            ties: stats.ties,
            current_streak: stats.current_streak,
            best_streak: stats.best_streak,
            win_rate: stats.win_rate(),
            win_rate_fill: stats.win_rate_fill(),
        }
    }
}

/// One render instruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Switch the visible screen.
    ShowScreen(Screen),
    /// Highlight the selected choice button, or clear the highlight.
    HighlightChoice(Option<Choice>),
    /// Update the player's weapon display slot.
    SetPlayerDisplay(GlyphSlot),
    /// Update the computer's weapon display slot.
    SetComputerDisplay(GlyphSlot),
    /// Show a result message.
    SetMessage { text: String, tone: MessageTone },
    /// Refresh the statistics panel.
    UpdateStats(StatsView),
    /// Pause before processing the next command (pacing, not sleep: the
    /// presentation layer schedules it).
    Delay(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameStats, Outcome};

    #[test]
    fn test_glyph_slot() {
        assert_eq!(GlyphSlot::Placeholder.glyph(), "?");
        assert_eq!(GlyphSlot::Weapon(Choice::Rock).glyph(), "🗿");
    }

    #[test]
    fn test_stats_view_derives_display_values() {
        let mut stats = GameStats::new();
        stats.record(Outcome::Player);
        stats.record(Outcome::Computer);

        let view = StatsView::from(&stats);
        assert_eq!(view.games_played, 2);
        assert_eq!(view.wins, 1);
        assert_eq!(view.win_rate, 50);
        assert!((view.win_rate_fill - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_command_serde_roundtrip() {
        let command = RenderCommand::SetMessage {
            text: "You win! Rock beats Scissors!".to_string(),
            tone: MessageTone::Win,
        };

        let json = serde_json::to_string(&command).unwrap();
        let back: RenderCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, command);
    }
}
