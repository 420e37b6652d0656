//! # rps-engine
//!
//! A rock-paper-scissors session engine with persistent statistics.
//!
//! ## Design Principles
//!
//! 1. **Explicit state, no globals**: one [`Session`] value owns the
//!    statistics, the RNG, and the phase machine; pure update functions in
//!    `core` do the actual work.
//!
//! 2. **UI-agnostic**: the controller emits [`RenderCommand`] batches and a
//!    presentation layer consumes them. Pacing delays are data, not sleeps.
//!
//! 3. **Storage never blocks play**: missing or corrupt records load as
//!    defaults, write failures are logged and swallowed.
//!
//! ## Modules
//!
//! - `core`: choices, the beats-relation, outcomes, statistics, RNG
//! - `session`: the session controller and its phase machine
//! - `render`: render commands and the display-surface traits
//! - `storage`: the persistent key-value boundary

pub mod core;
pub mod render;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{Choice, ChoiceParseError, ChoiceSource, GameRng, GameRngState, GameStats, Outcome};

pub use crate::session::{Session, SessionBuilder, SessionConfig, SessionError, SessionPhase};

pub use crate::render::{
    ConfirmPrompt, GlyphSlot, MessageTone, RecordingRenderer, RenderCommand, Renderer, Screen,
    StatsView,
};

pub use crate::storage::{load_stats, save_stats, FileStore, MemoryStore, StatsStore, StorageError, STATS_KEY};
