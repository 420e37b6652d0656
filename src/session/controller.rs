//! Game session controller.
//!
//! Owns the statistics record, the RNG, the phase machine, and a handle to
//! the persistent store. Every operation validates the current phase, then
//! returns the batch of [`RenderCommand`]s the presentation layer should
//! process, in order. Pacing delays are emitted as `Delay` commands; the
//! controller itself is fully synchronous and never sleeps.
//!
//! ## Round flow
//!
//! ```
//! use rps_engine::session::SessionBuilder;
//! use rps_engine::storage::MemoryStore;
//! use rps_engine::core::Choice;
//!
//! let mut session = SessionBuilder::new().seed(42).build(MemoryStore::new());
//!
//! let _welcome = session.initial_render();
//! let _pending = session.select_choice(Choice::Rock).unwrap();
//! let _revealed = session.resolve_round().unwrap();
//!
//! assert_eq!(session.stats().games_played, 1);
//! ```

use std::time::Duration;

use crate::core::{Choice, ChoiceSource, GameRng, GameStats, Outcome};
use crate::render::{ConfirmPrompt, GlyphSlot, MessageTone, RenderCommand, Screen, StatsView};
use crate::storage::{load_stats, save_stats, StatsStore};

use super::phase::{SessionError, SessionPhase};

/// Message shown while the opponent's draw is pending.
pub const THINKING_MESSAGE: &str = "Computer is thinking...";

/// Message shown when both sides pick the same weapon.
pub const TIE_MESSAGE: &str = "It's a tie! Same choice!";

/// Prompt text for the destructive statistics reset.
pub const RESET_PROMPT: &str = "Are you sure you want to reset all statistics?";

/// Message shown after a confirmed reset.
pub const RESET_MESSAGE: &str = "Statistics reset! Ready for a new game?";

/// Message shown when returning to the welcome screen.
pub const CHOOSE_MESSAGE: &str = "Choose your weapon!";

/// Pacing delays between phase transitions.
///
/// Both are surfaced to the presentation layer as `Delay` commands, never
/// slept in the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Pause between weapon selection and the round starting.
    pub select_delay: Duration,
    /// "Thinking" pause before the opponent's choice is revealed.
    pub think_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            select_delay: Duration::from_millis(500),
            think_delay: Duration::from_millis(1500),
        }
    }
}

/// Builder for creating a [`Session`].
#[derive(Debug, Default)]
pub struct SessionBuilder {
    config: SessionConfig,
    seed: Option<u64>,
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the selection-to-round delay.
    #[must_use]
    pub fn select_delay(mut self, delay: Duration) -> Self {
        self.config.select_delay = delay;
        self
    }

    /// Override the thinking delay.
    #[must_use]
    pub fn think_delay(mut self, delay: Duration) -> Self {
        self.config.think_delay = delay;
        self
    }

    /// Seed the opponent RNG for reproducible sessions.
    ///
    /// Without a seed the RNG is seeded from the operating system.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a session, loading persisted statistics from `store`.
    pub fn build<S: StatsStore>(self, store: S) -> Session<S, GameRng> {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        self.build_with_source(store, rng)
    }

    /// Build a session with a custom opponent source.
    pub fn build_with_source<S: StatsStore, R: ChoiceSource>(
        self,
        store: S,
        source: R,
    ) -> Session<S, R> {
        let stats = load_stats(&store);
        Session {
            config: self.config,
            stats,
            phase: SessionPhase::Idle,
            source,
            store,
        }
    }
}

/// The game session controller.
///
/// One instance per session; no ambient globals. State flows in and out of
/// the pure update functions in `core`, and every statistics mutation is
/// persisted before the command batch is returned.
#[derive(Debug)]
pub struct Session<S: StatsStore, R: ChoiceSource = GameRng> {
    config: SessionConfig,
    stats: GameStats,
    phase: SessionPhase,
    source: R,
    store: S,
}

impl<S: StatsStore, R: ChoiceSource> Session<S, R> {
    /// Commands that bring a fresh display surface up to date: welcome
    /// screen plus the persisted statistics.
    #[must_use]
    pub fn initial_render(&self) -> Vec<RenderCommand> {
        vec![
            RenderCommand::ShowScreen(Screen::Welcome),
            RenderCommand::UpdateStats(StatsView::from(&self.stats)),
        ]
    }

    /// Record the player's weapon selection and start the round.
    ///
    /// Only legal in `Idle`. While a round is pending the selection is
    /// rejected with [`SessionError::RoundInProgress`]; after a resolved
    /// round the caller must go through [`Session::play_again`] or
    /// [`Session::change_weapon`] first.
    pub fn select_choice(&mut self, choice: Choice) -> Result<Vec<RenderCommand>, SessionError> {
        match self.phase {
            SessionPhase::Idle => {}
            SessionPhase::Pending { .. } => return Err(SessionError::RoundInProgress),
            SessionPhase::Resolved { .. } => return Err(SessionError::SelectionNotOpen),
        }

        self.phase = SessionPhase::Pending { player: choice };

        let mut commands = vec![
            RenderCommand::HighlightChoice(Some(choice)),
            RenderCommand::Delay(self.config.select_delay),
            RenderCommand::ShowScreen(Screen::Game),
        ];
        commands.extend(self.thinking_commands());
        Ok(commands)
    }

    /// Draw the opponent's weapon, resolve the round, and persist stats.
    ///
    /// Only legal in `Pending`. The presentation layer calls this after
    /// honoring the thinking delay.
    pub fn resolve_round(&mut self) -> Result<Vec<RenderCommand>, SessionError> {
        let player = match self.phase {
            SessionPhase::Pending { player } => player,
            _ => return Err(SessionError::NoPendingRound),
        };

        let computer = self.source.draw();
        let outcome = Outcome::of(player, computer);

        self.stats.record(outcome);
        save_stats(&mut self.store, &self.stats);

        self.phase = SessionPhase::Resolved {
            player,
            computer,
            outcome,
        };

        let (text, tone) = result_message(outcome, player, computer);
        Ok(vec![
            RenderCommand::SetPlayerDisplay(GlyphSlot::Weapon(player)),
            RenderCommand::SetComputerDisplay(GlyphSlot::Weapon(computer)),
            RenderCommand::SetMessage { text, tone },
            RenderCommand::UpdateStats(StatsView::from(&self.stats)),
        ])
    }

    /// Replay the held weapon: `Resolved` → `Pending`.
    pub fn play_again(&mut self) -> Result<Vec<RenderCommand>, SessionError> {
        let player = match self.phase {
            SessionPhase::Resolved { player, .. } => player,
            _ => return Err(SessionError::NoResolvedRound),
        };

        self.phase = SessionPhase::Pending { player };
        Ok(self.thinking_commands().to_vec())
    }

    /// Return to the welcome screen and clear the selection.
    ///
    /// Legal from any phase; a pending round is discarded without touching
    /// the statistics.
    pub fn change_weapon(&mut self) -> Vec<RenderCommand> {
        self.phase = SessionPhase::Idle;
        vec![
            RenderCommand::ShowScreen(Screen::Welcome),
            RenderCommand::HighlightChoice(None),
            RenderCommand::SetMessage {
                text: CHOOSE_MESSAGE.to_string(),
                tone: MessageTone::Neutral,
            },
        ]
    }

    /// Reset statistics to all-zero, gated on the confirmation prompt.
    ///
    /// Declining returns an empty batch and changes nothing. Confirming
    /// zeroes and persists the record.
    pub fn reset_stats(&mut self, prompt: &mut dyn ConfirmPrompt) -> Vec<RenderCommand> {
        if !prompt.confirm(RESET_PROMPT) {
            return Vec::new();
        }

        self.stats = GameStats::default();
        save_stats(&mut self.store, &self.stats);

        vec![
            RenderCommand::UpdateStats(StatsView::from(&self.stats)),
            RenderCommand::SetMessage {
                text: RESET_MESSAGE.to_string(),
                tone: MessageTone::Neutral,
            },
        ]
    }

    /// Current statistics.
    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Pacing configuration.
    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// The underlying store (mainly for inspecting persisted state).
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn thinking_commands(&self) -> [RenderCommand; 4] {
        [
            RenderCommand::SetPlayerDisplay(GlyphSlot::Placeholder),
            RenderCommand::SetComputerDisplay(GlyphSlot::Placeholder),
            RenderCommand::SetMessage {
                text: THINKING_MESSAGE.to_string(),
                tone: MessageTone::Neutral,
            },
            RenderCommand::Delay(self.config.think_delay),
        ]
    }
}

/// Message text and tone for a resolved round.
///
/// `You win! Rock beats Scissors!` / `Computer wins! Paper beats Rock!` /
/// `It's a tie! Same choice!`.
#[must_use]
pub fn result_message(outcome: Outcome, player: Choice, computer: Choice) -> (String, MessageTone) {
    match outcome {
        Outcome::Player => (
            format!("You win! {} beats {}!", player.name(), computer.name()),
            MessageTone::Win,
        ),
        Outcome::Computer => (
            format!(
                "Computer wins! {} beats {}!",
                computer.name(),
                player.name()
            ),
            MessageTone::Loss,
        ),
        Outcome::Tie => (TIE_MESSAGE.to_string(), MessageTone::Tie),
    }
}
