//! Property-based tests for the outcome table and statistics invariants.

use proptest::prelude::*;

use rps_engine::core::{Choice, GameStats, Outcome};

fn any_choice() -> impl Strategy<Value = Choice> {
    prop::sample::select(Choice::ALL.to_vec())
}

fn any_outcome() -> impl Strategy<Value = Outcome> {
    prop::sample::select(vec![Outcome::Player, Outcome::Computer, Outcome::Tie])
}

proptest! {
    /// Ties happen exactly on the diagonal of the 3×3 input space.
    #[test]
    fn proptest_tie_iff_equal(a in any_choice(), b in any_choice()) {
        prop_assert_eq!(Outcome::of(a, b) == Outcome::Tie, a == b);
    }

    /// Swapping the inputs swaps the winner.
    #[test]
    fn proptest_outcome_inverse(a in any_choice(), b in any_choice()) {
        let forward = Outcome::of(a, b);
        let backward = Outcome::of(b, a);

        match forward {
            Outcome::Tie => prop_assert_eq!(backward, Outcome::Tie),
            Outcome::Player => prop_assert_eq!(backward, Outcome::Computer),
            Outcome::Computer => prop_assert_eq!(backward, Outcome::Player),
        }
    }

    /// After any sequence of rounds the sum identity holds and the streak
    /// watermark never falls below the current streak.
    #[test]
    fn proptest_stats_invariants(outcomes in prop::collection::vec(any_outcome(), 0..200)) {
        let mut stats = GameStats::new();

        for outcome in outcomes {
            stats.record(outcome);

            prop_assert_eq!(stats.games_played, stats.wins + stats.losses + stats.ties);
            prop_assert!(stats.best_streak >= stats.current_streak);
            prop_assert!(stats.is_consistent());
        }
    }

    /// best_streak is monotonically non-decreasing across rounds.
    #[test]
    fn proptest_best_streak_monotone(outcomes in prop::collection::vec(any_outcome(), 0..200)) {
        let mut stats = GameStats::new();
        let mut previous_best = 0;

        for outcome in outcomes {
            stats.record(outcome);
            prop_assert!(stats.best_streak >= previous_best);
            previous_best = stats.best_streak;
        }
    }

    /// Ties never move the streak; losses always zero it.
    #[test]
    fn proptest_streak_transitions(outcomes in prop::collection::vec(any_outcome(), 1..100)) {
        let mut stats = GameStats::new();

        for outcome in outcomes {
            let streak_before = stats.current_streak;
            stats.record(outcome);

            match outcome {
                Outcome::Player => prop_assert_eq!(stats.current_streak, streak_before + 1),
                Outcome::Computer => prop_assert_eq!(stats.current_streak, 0),
                Outcome::Tie => prop_assert_eq!(stats.current_streak, streak_before),
            }
        }
    }

    /// win_rate stays a valid percentage and matches the rounded ratio.
    #[test]
    fn proptest_win_rate(outcomes in prop::collection::vec(any_outcome(), 0..200)) {
        let mut stats = GameStats::new();
        for outcome in outcomes {
            stats.record(outcome);
        }

        let rate = stats.win_rate();
        prop_assert!(rate <= 100);

        if stats.games_played == 0 {
            prop_assert_eq!(rate, 0);
        } else {
            let expected = (100.0 * f64::from(stats.wins) / f64::from(stats.games_played)).round() as u8;
            prop_assert_eq!(rate, expected);
        }
    }

    /// Serialized records survive a JSON round trip unchanged.
    #[test]
    fn proptest_stats_json_roundtrip(outcomes in prop::collection::vec(any_outcome(), 0..50)) {
        let mut stats = GameStats::new();
        for outcome in outcomes {
            stats.record(outcome);
        }

        let json = serde_json::to_string(&stats).unwrap();
        let back: GameStats = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, stats);
    }
}
