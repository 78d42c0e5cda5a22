//! Controller tunables and their YAML representation.
//!
//! ```yaml
//! locomotion:
//!   move_speed: 5.0
//!   jump_height: 2.0
//!   gravity: -9.81
//!   face_move_direction: true
//! zoom:
//!   min_distance: 3.0
//!   max_distance: 15.0
//! ```
//!
//! Omitted fields fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating controller configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Locomotion tunables. Immutable once a controller is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Horizontal speed in units per second.
    pub move_speed: f32,
    /// Apex height of a jump.
    pub jump_height: f32,
    /// Vertical acceleration; must be negative.
    pub gravity: f32,
    /// Turn the body toward the movement direction.
    pub face_move_direction: bool,
    /// Slerp rate used when facing the movement direction, per second.
    pub turn_rate: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_height: 2.0,
            gravity: -9.81,
            face_move_direction: false,
            turn_rate: 10.0,
        }
    }
}

impl LocomotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("locomotion.move_speed", self.move_speed)?;
        finite("locomotion.jump_height", self.jump_height)?;
        finite("locomotion.gravity", self.gravity)?;
        finite("locomotion.turn_rate", self.turn_rate)?;
        non_negative("locomotion.move_speed", self.move_speed)?;
        non_negative("locomotion.jump_height", self.jump_height)?;
        non_negative("locomotion.turn_rate", self.turn_rate)?;
        if self.gravity >= 0.0 {
            return Err(invalid(
                "locomotion.gravity",
                format!("must be negative, got {}", self.gravity),
            ));
        }
        Ok(())
    }

    /// Vertical launch speed that reaches `jump_height` under `gravity`.
    pub fn launch_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }
}

/// Orbital zoom tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Radius change per unit of scroll.
    pub zoom_speed: f32,
    /// Smoothing rate toward the target radius, per second.
    pub zoom_lerp_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_speed: 2.0,
            zoom_lerp_speed: 10.0,
            min_distance: 3.0,
            max_distance: 15.0,
        }
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("zoom.zoom_speed", self.zoom_speed)?;
        finite("zoom.zoom_lerp_speed", self.zoom_lerp_speed)?;
        finite("zoom.min_distance", self.min_distance)?;
        finite("zoom.max_distance", self.max_distance)?;
        non_negative("zoom.zoom_speed", self.zoom_speed)?;
        non_negative("zoom.zoom_lerp_speed", self.zoom_lerp_speed)?;
        non_negative("zoom.min_distance", self.min_distance)?;
        if self.min_distance > self.max_distance {
            return Err(invalid(
                "zoom.min_distance",
                format!(
                    "{} exceeds max_distance {}",
                    self.min_distance, self.max_distance
                ),
            ));
        }
        Ok(())
    }

    /// Clamp `radius` into `[min_distance, max_distance]`.
    pub fn clamp_radius(&self, radius: f32) -> f32 {
        radius.max(self.min_distance).min(self.max_distance)
    }
}

/// Configuration for both controllers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub locomotion: LocomotionConfig,
    pub zoom: ZoomConfig,
}

impl ControllerConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded controller config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.locomotion.validate()?;
        self.zoom.validate()
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value < 0.0 {
        Err(invalid(field, format!("must not be negative, got {value}")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        ControllerConfig::default().validate().unwrap();
    }

    #[test]
    fn launch_velocity_matches_kinematics() {
        let cfg = LocomotionConfig {
            jump_height: 2.0,
            gravity: -9.81,
            ..Default::default()
        };
        assert!((cfg.launch_velocity() - 6.26).abs() < 1e-2);
    }

    #[test]
    fn partial_yaml_uses_defaults() {
        let cfg = ControllerConfig::from_yaml_str(
            "locomotion:\n  move_speed: 7.5\nzoom:\n  max_distance: 20.0\n",
        )
        .unwrap();
        assert_eq!(cfg.locomotion.move_speed, 7.5);
        assert_eq!(cfg.locomotion.gravity, -9.81);
        assert_eq!(cfg.zoom.max_distance, 20.0);
        assert_eq!(cfg.zoom.min_distance, 3.0);
    }

    #[test]
    fn empty_document_is_default() {
        let cfg = ControllerConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, ControllerConfig::default());
    }

    #[test]
    fn positive_gravity_rejected() {
        let err = ControllerConfig::from_yaml_str("locomotion:\n  gravity: 9.81\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "locomotion.gravity",
                ..
            }
        ));
    }

    #[test]
    fn inverted_zoom_bounds_rejected() {
        let cfg = ZoomConfig {
            min_distance: 10.0,
            max_distance: 5.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Invalid {
                field: "zoom.min_distance",
                ..
            })
        ));
    }

    #[test]
    fn negative_zoom_speed_rejected() {
        let err = ControllerConfig::from_yaml_str("zoom:\n  zoom_speed: -2.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "zoom.zoom_speed",
                ..
            }
        ));
    }

    #[test]
    fn non_finite_rejected() {
        let cfg = LocomotionConfig {
            move_speed: f32::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn malformed_yaml_is_yaml_error() {
        let err = ControllerConfig::from_yaml_str("locomotion: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ControllerConfig::load("/nonexistent/strider.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn clamp_radius_bounds() {
        let cfg = ZoomConfig::default();
        assert_eq!(cfg.clamp_radius(1.0), 3.0);
        assert_eq!(cfg.clamp_radius(99.0), 15.0);
        assert_eq!(cfg.clamp_radius(7.0), 7.0);
    }
}
