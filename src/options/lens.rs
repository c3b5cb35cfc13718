use serde::{Deserialize, Serialize};

use crate::error::RigError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Lens projection parameters.
pub struct LensOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for LensOptions {
    fn default() -> Self {
        Self {
            fovy: 90.0,
            znear: 10.0,
            zfar: 100_000.0,
        }
    }
}

impl LensOptions {
    /// Reject degenerate projection parameters.
    pub fn validate(&self) -> Result<(), RigError> {
        for (name, value) in
            [("fovy", self.fovy), ("znear", self.znear), ("zfar", self.zfar)]
        {
            if !value.is_finite() {
                return Err(RigError::InvalidOptions(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.fovy <= 0.0 || self.fovy >= 180.0 {
            return Err(RigError::InvalidOptions(format!(
                "fovy must be in (0, 180), got {}",
                self.fovy
            )));
        }
        if self.znear <= 0.0 || self.zfar <= self.znear {
            return Err(RigError::InvalidOptions(format!(
                "clip planes must satisfy 0 < znear < zfar, got {} / {}",
                self.znear, self.zfar
            )));
        }
        Ok(())
    }
}
