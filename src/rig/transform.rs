//! World pose for rig attachments.
//!
//! Coordinate system: right-handed, Z-up (X right, Y forward, Z up).
//! "Vertical" always means the Z component. The rig never rolls, so a pose
//! is a translation plus yaw (about +Z) and pitch (elevation above the XY
//! plane), both in radians.

use glam::{Mat4, Quat, Vec3};

/// Translation + yaw/pitch orientation of a rig attachment point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// World-space position.
    pub translation: Vec3,
    /// Rotation about +Z, radians.
    pub yaw: f32,
    /// Elevation above the XY plane, radians (negative looks down).
    pub pitch: f32,
}

impl Transform {
    /// Pose at a position with identity orientation.
    #[must_use]
    pub const fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Unit forward direction for this orientation.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch)
    }

    /// Orientation as a quaternion (yaw about +Z, then pitch).
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.yaw) * Quat::from_rotation_y(-self.pitch)
    }

    /// Affine world matrix for this pose.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.translation)
    }
}

/// Project a direction onto the XY plane and renormalize.
///
/// Returns the zero vector when the input is exactly vertical (nothing left
/// after flattening) — callers must not assume a unit result in that
/// degenerate case.
#[must_use]
pub fn flattened_xy(direction: Vec3) -> Vec3 {
    Vec3::new(direction.x, direction.y, 0.0).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_matches_rotation_of_x_axis() {
        let pose = Transform {
            translation: Vec3::ZERO,
            yaw: 0.7,
            pitch: -0.4,
        };
        let from_quat = pose.rotation() * Vec3::X;
        assert!(pose.forward().abs_diff_eq(from_quat, 1e-6));
    }

    #[test]
    fn level_forward_lies_in_xy_plane() {
        let pose = Transform {
            yaw: 1.2,
            ..Transform::default()
        };
        let fwd = pose.forward();
        assert!(fwd.z.abs() < 1e-6);
        assert!((fwd.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn flatten_renormalizes_non_unit_input() {
        let flat = flattened_xy(Vec3::new(0.6, 0.8, -0.2));
        assert!(flat.abs_diff_eq(Vec3::new(0.6, 0.8, 0.0), 1e-6));

        // Non-unit XY component: (3, 4) must come back as (0.6, 0.8).
        let flat = flattened_xy(Vec3::new(3.0, 4.0, -2.0));
        assert!(flat.abs_diff_eq(Vec3::new(0.6, 0.8, 0.0), 1e-6));
    }

    #[test]
    fn flatten_of_vertical_direction_is_zero() {
        assert_eq!(flattened_xy(Vec3::new(0.0, 0.0, -1.0)), Vec3::ZERO);
    }
}
