use serde::{Deserialize, Serialize};

use crate::error::RigError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Pivot-arm length, angle, and smoothing parameters.
pub struct RigOptions {
    /// Longest allowed arm length (fully zoomed out); also the initial
    /// length and zoom target.
    pub max_arm_length: f32,
    /// Shortest allowed arm length (fully zoomed in).
    pub min_arm_length: f32,
    /// Zoom interpolation speed; higher is snappier.
    pub zoom_interp_speed: f32,
    /// Initial camera angle, normalized: 0 is horizontal, 1 is directly
    /// overhead looking down.
    pub default_angle: f32,
    /// Positional lag speed for the arm's reported transform.
    pub position_lag_speed: f32,
    /// Rotational lag speed for the arm's reported transform.
    pub rotation_lag_speed: f32,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            max_arm_length: 1000.0,
            min_arm_length: 200.0,
            zoom_interp_speed: 5.0,
            default_angle: 0.75,
            position_lag_speed: 10.0,
            rotation_lag_speed: 10.0,
        }
    }
}

impl RigOptions {
    /// Reject configurations the controller has no valid behavior for.
    /// Values are untrusted (they may come from a preset file), so
    /// non-finite floats are rejected up front.
    pub fn validate(&self) -> Result<(), RigError> {
        let fields = [
            ("max_arm_length", self.max_arm_length),
            ("min_arm_length", self.min_arm_length),
            ("zoom_interp_speed", self.zoom_interp_speed),
            ("default_angle", self.default_angle),
            ("position_lag_speed", self.position_lag_speed),
            ("rotation_lag_speed", self.rotation_lag_speed),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(RigError::InvalidOptions(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.min_arm_length <= 0.0 {
            return Err(RigError::InvalidOptions(format!(
                "min_arm_length must be positive, got {}",
                self.min_arm_length
            )));
        }
        if self.min_arm_length >= self.max_arm_length {
            return Err(RigError::InvalidOptions(format!(
                "min_arm_length ({}) must be below max_arm_length ({})",
                self.min_arm_length, self.max_arm_length
            )));
        }
        if self.zoom_interp_speed <= 0.0 {
            return Err(RigError::InvalidOptions(format!(
                "zoom_interp_speed must be positive, got {}",
                self.zoom_interp_speed
            )));
        }
        if !(0.0..=1.0).contains(&self.default_angle) {
            return Err(RigError::InvalidOptions(format!(
                "default_angle must be in [0, 1], got {}",
                self.default_angle
            )));
        }
        if self.position_lag_speed <= 0.0 || self.rotation_lag_speed <= 0.0 {
            return Err(RigError::InvalidOptions(
                "lag speeds must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}
