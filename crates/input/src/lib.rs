//! Input actions: the vocabulary input layers push into controllers.
//!
//! # Invariants
//! - Controllers consume actions, never raw device events.
//! - A disabled action map drops every event it is asked to dispatch.

pub mod action;
pub mod sink;

pub use action::{Action, ActionPhase, InputEvent};
pub use sink::{ActionMap, InputSink};

pub fn crate_info() -> &'static str {
    "strider-input v0.1.0"
}
