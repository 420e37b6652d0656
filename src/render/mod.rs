//! Display-surface interface.
//!
//! The session controller never touches a concrete UI toolkit. It emits
//! [`RenderCommand`] batches; a presentation layer implements [`Renderer`]
//! and consumes them in order, honoring `Delay` steps. The controller never
//! reads display state back.

pub mod command;
pub mod surface;

pub use command::{GlyphSlot, MessageTone, RenderCommand, Screen, StatsView};
pub use surface::{ConfirmPrompt, RecordingRenderer, Renderer};
