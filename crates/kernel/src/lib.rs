//! Frame kernel: the update interface, behaviour lifecycle, and the scheduler
//! that owns behaviours on behalf of a host loop.
//!
//! # Invariants
//! - Each enabled behaviour is updated exactly once per frame, in
//!   registration order.
//! - Input reaches only enabled behaviours.
//! - Lifecycle hooks fire only on real enable/disable transitions.

pub mod scheduler;

pub use scheduler::{Behaviour, BehaviourId, Scheduler, SchedulerError, SchedulerEvent, Updatable};

pub fn crate_info() -> &'static str {
    "strider-kernel v0.1.0"
}
