use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Spatial transform: position, rotation, scale.
///
/// Forward is the local +Z axis and right is the local +X axis, with +Y up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Transform at `position` with identity rotation.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Transform whose rotation is a yaw of `degrees` around +Y.
    pub fn from_yaw_degrees(degrees: f32) -> Self {
        Self {
            rotation: Quat::from_rotation_y(degrees.to_radians()),
            ..Self::default()
        }
    }

    /// World-space direction of the local +Z axis.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// World-space direction of the local +X axis.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }
}
