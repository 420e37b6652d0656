//! Persistence boundary for game statistics.
//!
//! ## Error posture
//!
//! Storage problems never reach the player:
//! - A missing or unparseable record loads as the all-zero default with a
//!   `warn!` diagnostic.
//! - A record that parses but violates the statistics invariants is treated
//!   the same as corruption.
//! - Write failures are logged with `error!` and swallowed; gameplay
//!   proceeds, the round simply fails to persist.

pub mod file;
pub mod memory;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{StatsStore, StorageError, STATS_KEY};

use log::{error, warn};

use crate::core::GameStats;

/// Load statistics from the store, falling back to defaults.
///
/// Never fails: absence, read errors, parse errors, and inconsistent
/// records all yield [`GameStats::default`].
#[must_use]
pub fn load_stats<S: StatsStore + ?Sized>(store: &S) -> GameStats {
    let raw = match store.load(STATS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return GameStats::default(),
        Err(err) => {
            warn!("failed to read stats record: {}", err);
            return GameStats::default();
        }
    };

    match serde_json::from_str::<GameStats>(&raw) {
        Ok(stats) if stats.is_consistent() => stats,
        Ok(_) => {
            warn!("stats record violates invariants, resetting to defaults");
            GameStats::default()
        }
        Err(err) => {
            warn!("corrupt stats record, resetting to defaults: {}", err);
            GameStats::default()
        }
    }
}

/// Serialize and write statistics under [`STATS_KEY`].
///
/// Failures are logged and swallowed.
pub fn save_stats<S: StatsStore + ?Sized>(store: &mut S, stats: &GameStats) {
    let raw = match serde_json::to_string(stats) {
        Ok(raw) => raw,
        Err(err) => {
            error!("failed to serialize stats: {}", err);
            return;
        }
    };

    if let Err(err) = store.save(STATS_KEY, &raw) {
        error!("failed to persist stats: {}", err);
    }
}
