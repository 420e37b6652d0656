//! Game session controller and its phase machine.

pub mod controller;
pub mod phase;

pub use controller::{
    result_message, Session, SessionBuilder, SessionConfig, CHOOSE_MESSAGE, RESET_MESSAGE,
    RESET_PROMPT, THINKING_MESSAGE, TIE_MESSAGE,
};
pub use phase::{SessionError, SessionPhase};
