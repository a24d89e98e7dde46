use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_4;
use std::path::Path;
use vernissage_common::RoomBounds;
use vernissage_input::KeyBindings;

/// Errors from loading a camera configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid camera config: {0}")]
    Invalid(String),
}

/// Walk camera tunables.
///
/// `Default` matches the gallery viewer's fixed constants. Any field left out
/// of a YAML file keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Walking speed in units per second.
    pub speed: f32,
    /// Radians of yaw/pitch per pixel of pointer drag.
    pub look_sensitivity: f32,
    pub eye_height: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]`.
    pub pitch_limit: f32,
    pub bounds: RoomBounds,
    pub start_position: Vec3,
    pub start_yaw: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub bindings: KeyBindings,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: 4.0,
            look_sensitivity: 0.003,
            eye_height: 1.7,
            pitch_limit: FRAC_PI_4,
            bounds: RoomBounds::new(-6.5, 6.5, -8.0, 7.0),
            start_position: Vec3::new(0.0, 1.7, 6.0),
            start_yaw: 0.0,
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            bindings: KeyBindings::default(),
        }
    }
}

impl CameraConfig {
    /// Parse a YAML document and validate it.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded camera config");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Reject values that would make clamping or projection meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.bounds;
        if !(b.min_x <= b.max_x && b.min_z <= b.max_z) {
            return Err(ConfigError::Invalid(format!(
                "room bounds are inverted: x [{}, {}], z [{}, {}]",
                b.min_x, b.max_x, b.min_z, b.max_z
            )));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(ConfigError::Invalid(format!("speed {}", self.speed)));
        }
        if !self.look_sensitivity.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "look_sensitivity {}",
                self.look_sensitivity
            )));
        }
        if !(self.pitch_limit >= 0.0 && self.pitch_limit < std::f32::consts::FRAC_PI_2) {
            return Err(ConfigError::Invalid(format!(
                "pitch_limit {} must be in [0, pi/2)",
                self.pitch_limit
            )));
        }
        if !(self.eye_height.is_finite() && self.eye_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "eye_height {} must be positive",
                self.eye_height
            )));
        }
        if !(self.start_position.is_finite() && self.start_yaw.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "start pose {} yaw {} is not finite",
                self.start_position, self.start_yaw
            )));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "fov_degrees {} must be in (0, 180)",
                self.fov_degrees
            )));
        }
        if !(self.near > 0.0 && self.far > self.near && self.far.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "near {} / far {}",
                self.near, self.far
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernissage_input::{Action, KeyCode};

    #[test]
    fn defaults_match_viewer_constants() {
        let c = CameraConfig::default();
        assert_eq!(c.speed, 4.0);
        assert_eq!(c.look_sensitivity, 0.003);
        assert_eq!(c.eye_height, 1.7);
        assert_eq!(c.bounds, RoomBounds::new(-6.5, 6.5, -8.0, 7.0));
        assert_eq!(c.start_position, Vec3::new(0.0, 1.7, 6.0));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let c = CameraConfig::from_yaml("speed: 2.5\n").unwrap();
        assert_eq!(c.speed, 2.5);
        assert_eq!(c.look_sensitivity, 0.003);
        assert_eq!(c.bindings.action(KeyCode::KeyW), Action::MoveForward);
    }

    #[test]
    fn inverted_bounds_rejected() {
        let yaml = "bounds:\n  min_x: 3.0\n  max_x: -3.0\n  min_z: -1.0\n  max_z: 1.0\n";
        let err = CameraConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn non_finite_or_out_of_range_values_rejected() {
        for yaml in [
            "eye_height: .nan\n",
            "eye_height: -1.0\n",
            "fov_degrees: 180.0\n",
            "fov_degrees: 0.0\n",
            "start_position: [.inf, 1.7, 6.0]\n",
            "start_yaw: .nan\n",
            "far: .inf\n",
        ] {
            let err = CameraConfig::from_yaml(yaml).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{yaml}");
        }
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = CameraConfig::from_yaml("speed: [fast").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn save_and_load() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let mut config = CameraConfig::default();
        config.speed = 6.0;
        config.save(tmp.path()).unwrap();

        let loaded = CameraConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
