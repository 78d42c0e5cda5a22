//! Shared value types and motion math used by every strider crate.
//!
//! # Invariants
//! - Math helpers never produce NaN from a zero-length input; degenerate
//!   vectors are reported as `None` instead.
//! - Blend factors are clamped to `[0, 1]` before interpolation.

pub mod math;
pub mod types;

pub use math::{flatten_horizontal, lerp_clamped, look_rotation, slerp_clamped};
pub use types::Transform;

pub fn crate_info() -> &'static str {
    "strider-common v0.1.0"
}
