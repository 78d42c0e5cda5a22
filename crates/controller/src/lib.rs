//! Third-person character controllers.
//!
//! Two independent behaviours driven by a host frame loop:
//! - [`LocomotionController`] turns a 2D move axis into camera-relative ground
//!   movement with gravity and buffered jumping.
//! - [`ZoomController`] turns scroll input into a smoothed orbit radius.
//!
//! # Invariants
//! - Controllers never talk to each other; they share only the input source.
//! - Collision resolution, camera mechanics and device handling live behind
//!   the collaborator traits in [`mover`], [`camera`] and [`rig`].
//! - Zoom radii stay within `[min_distance, max_distance]`.

pub mod camera;
pub mod config;
pub mod locomotion;
pub mod mover;
pub mod rig;
pub mod zoom;

pub use camera::{CameraBasis, CameraBinding};
pub use config::{ConfigError, ControllerConfig, LocomotionConfig, ZoomConfig};
pub use locomotion::{LocomotionController, LocomotionFrame};
pub use mover::{CharacterMover, CollisionFlags, PlaneMover};
pub use rig::{NoPointer, OrbitFollow, OrbitRig, PointerLock};
pub use zoom::{ZoomController, ZoomFrame};

pub fn crate_info() -> &'static str {
    "strider-controller v0.1.0"
}
