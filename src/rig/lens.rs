//! The lens: the viewpoint at the far end of the pivot arm.
//!
//! Rigidly attached — it carries no pose of its own, only projection
//! parameters. Its world transform is derived from the arm's reported pose
//! on demand, and the rendering collaborator consumes the resulting view
//! and projection matrices.

use glam::{Mat4, Vec3};

use crate::options::LensOptions;
use crate::rig::pivot_arm::PivotArm;
use crate::rig::transform::Transform;

/// Projection parameters of the rig viewpoint.
#[derive(Debug, Clone)]
pub struct Lens {
    fovy: f32,
    znear: f32,
    zfar: f32,
}

impl Lens {
    /// Create a lens from configured projection parameters.
    #[must_use]
    pub fn new(options: &LensOptions) -> Self {
        Self {
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// World pose of the lens: at the arm's end, sharing the arm's reported
    /// orientation (looking back along the arm toward the character).
    #[must_use]
    pub fn world_transform(&self, arm: &PivotArm) -> Transform {
        let reported = arm.reported_transform();
        Transform {
            translation: arm.end_position(),
            yaw: reported.yaw,
            pitch: reported.pitch,
        }
    }

    /// Unit forward direction of the lens.
    #[must_use]
    pub fn forward(&self, arm: &PivotArm) -> Vec3 {
        arm.reported_transform().forward()
    }

    /// View matrix for the rendering collaborator (right-handed, Z-up).
    #[must_use]
    pub fn view_matrix(&self, arm: &PivotArm) -> Mat4 {
        let pose = self.world_transform(arm);
        Mat4::look_to_rh(pose.translation, pose.forward(), Vec3::Z)
    }

    /// Perspective projection matrix for the given viewport aspect ratio.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            aspect,
            self.znear,
            self.zfar,
        )
    }
}
