//! Session phase machine.
//!
//! `Idle` → (select_choice) → `Pending` → (resolve_round) → `Resolved` →
//! (play_again) → `Pending` again, or (change_weapon) → `Idle`. There is no
//! terminal phase; the loop runs until the host shuts down.

use serde::{Deserialize, Serialize};

use crate::core::{Choice, Outcome};

/// Where the session currently is in its round loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No weapon selected; welcome screen shown.
    Idle,
    /// A weapon is held and the round awaits resolution.
    Pending { player: Choice },
    /// The round resolved; outcome and stats are on screen.
    Resolved {
        player: Choice,
        computer: Choice,
        outcome: Outcome,
    },
}

impl SessionPhase {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionPhase::Idle)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionPhase::Pending { .. })
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, SessionPhase::Resolved { .. })
    }
}

/// Error type for operations invoked in the wrong phase.
///
/// Overlapping selections are rejected rather than queued: two in-flight
/// rounds could otherwise corrupt the displayed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A selection arrived while a round was still pending resolution.
    RoundInProgress,
    /// A selection arrived outside the welcome screen; the caller should
    /// use `play_again` or `change_weapon` from a resolved round.
    SelectionNotOpen,
    /// `resolve_round` was called with no round pending.
    NoPendingRound,
    /// `play_again` was called with no resolved round to replay.
    NoResolvedRound,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::RoundInProgress => {
                write!(f, "a round is already pending resolution")
            }
            SessionError::SelectionNotOpen => {
                write!(f, "selection is only open from the welcome screen")
            }
            SessionError::NoPendingRound => write!(f, "no round is pending resolution"),
            SessionError::NoResolvedRound => write!(f, "no resolved round to replay"),
        }
    }
}

impl std::error::Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_predicates() {
        assert!(SessionPhase::Idle.is_idle());

        let pending = SessionPhase::Pending {
            player: Choice::Rock,
        };
        assert!(pending.is_pending());
        assert!(!pending.is_idle());

        let resolved = SessionPhase::Resolved {
            player: Choice::Rock,
            computer: Choice::Scissors,
            outcome: Outcome::Player,
        };
        assert!(resolved.is_resolved());
        assert!(!resolved.is_pending());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SessionError::RoundInProgress.to_string(),
            "a round is already pending resolution"
        );
    }
}
