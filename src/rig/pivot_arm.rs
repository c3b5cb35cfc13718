//! The pivot arm: the boom connecting the character to the viewpoint.
//!
//! The arm attaches at the character's root and extends backwards along its
//! own world orientation. Its yaw is deliberately NOT inherited from the
//! character — rotating the camera never spins the character model, and
//! turning the character never drags the camera around.
//!
//! The arm keeps two poses: the *target* transform derived from the owner
//! root each step, and the *reported* transform that trails it with
//! positional and rotational lag. Rendering consumes the reported pose.

use glam::Vec3;

use crate::rig::transform::Transform;
use crate::util::smoothing::{exp_approach, exp_approach_angle};

/// How the arm attaches to the host scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentRules {
    /// Inherit the owner's yaw. Off for this rig: camera yaw is decoupled
    /// from the character's facing.
    pub inherit_yaw: bool,
    /// Sweep for geometry between character and lens. Off: the camera must
    /// not zoom in when the character stands behind a blocking object.
    pub collision_sweep: bool,
    /// Smooth the reported position toward the target position.
    pub position_lag: bool,
    /// Smooth the reported orientation toward the target orientation.
    pub rotation_lag: bool,
}

impl Default for AttachmentRules {
    fn default() -> Self {
        Self {
            inherit_yaw: false,
            collision_sweep: false,
            position_lag: true,
            rotation_lag: true,
        }
    }
}

/// Distance + orientation offset from the character to the viewpoint.
#[derive(Debug, Clone)]
pub struct PivotArm {
    arm_length: f32,
    yaw: f32,
    pitch: f32,
    rules: AttachmentRules,
    position_lag_speed: f32,
    rotation_lag_speed: f32,
    reported: Transform,
}

impl PivotArm {
    /// Create an arm of the given length and world pitch, with the reported
    /// pose snapped to the owner root (no initial lag swing-in).
    #[must_use]
    pub fn new(
        arm_length: f32,
        pitch: f32,
        rules: AttachmentRules,
        position_lag_speed: f32,
        rotation_lag_speed: f32,
        owner_root: &Transform,
    ) -> Self {
        let mut arm = Self {
            arm_length,
            yaw: 0.0,
            pitch,
            rules,
            position_lag_speed,
            rotation_lag_speed,
            reported: Transform::default(),
        };
        arm.reported = arm.target_transform(owner_root);
        arm
    }

    /// Current interpolated arm length.
    #[must_use]
    pub fn arm_length(&self) -> f32 {
        self.arm_length
    }

    /// World yaw of the arm, radians.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// World pitch of the arm, radians.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Attachment rules in effect.
    #[must_use]
    pub fn rules(&self) -> AttachmentRules {
        self.rules
    }

    /// Apply a direct yaw increment (no smoothing of its own; only the
    /// reported-pose rotation lag softens it downstream).
    pub fn add_yaw(&mut self, delta: f32) {
        self.yaw += delta;
    }

    /// Advance the arm length toward `target` by one exponential-approach
    /// step. The length converges but is never set instantaneously.
    pub fn interp_length_toward(&mut self, target: f32, dt: f32, speed: f32) {
        self.arm_length = exp_approach(self.arm_length, target, dt, speed);
    }

    /// The pose the arm is steering toward this step: position from the
    /// owner root, orientation from the arm's own world yaw/pitch (plus the
    /// owner's yaw only when inheritance is on).
    #[must_use]
    pub fn target_transform(&self, owner_root: &Transform) -> Transform {
        let yaw = if self.rules.inherit_yaw {
            owner_root.yaw + self.yaw
        } else {
            self.yaw
        };
        Transform {
            translation: owner_root.translation,
            yaw,
            pitch: self.pitch,
        }
    }

    /// Advance the reported pose toward `target` with the configured lag.
    /// Axes with lag disabled snap immediately.
    pub fn step_lag(&mut self, target: &Transform, dt: f32) {
        if self.rules.position_lag {
            let speed = self.position_lag_speed;
            let cur = self.reported.translation;
            self.reported.translation = cur
                + (target.translation - cur)
                    * (1.0 - (-speed * dt).exp());
        } else {
            self.reported.translation = target.translation;
        }

        if self.rules.rotation_lag {
            let speed = self.rotation_lag_speed;
            self.reported.yaw =
                exp_approach_angle(self.reported.yaw, target.yaw, dt, speed);
            self.reported.pitch = exp_approach(
                self.reported.pitch,
                target.pitch,
                dt,
                speed,
            );
        } else {
            self.reported.yaw = target.yaw;
            self.reported.pitch = target.pitch;
        }
    }

    /// The lagged pose rendering should use.
    #[must_use]
    pub fn reported_transform(&self) -> &Transform {
        &self.reported
    }

    /// World position of the far end of the arm: `arm_length` behind the
    /// pivot along the reported orientation.
    #[must_use]
    pub fn end_position(&self) -> Vec3 {
        self.reported.translation - self.reported.forward() * self.arm_length
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn arm_at_origin() -> PivotArm {
        PivotArm::new(
            10.0,
            0.0,
            AttachmentRules::default(),
            10.0,
            10.0,
            &Transform::default(),
        )
    }

    #[test]
    fn owner_yaw_does_not_leak_into_arm_yaw() {
        let arm = arm_at_origin();
        let owner = Transform {
            yaw: std::f32::consts::FRAC_PI_2,
            ..Transform::default()
        };
        let target = arm.target_transform(&owner);
        assert_eq!(target.yaw, 0.0);
    }

    #[test]
    fn owner_position_is_inherited() {
        let arm = arm_at_origin();
        let owner = Transform::from_translation(Vec3::new(5.0, -3.0, 1.0));
        let target = arm.target_transform(&owner);
        assert_eq!(target.translation, owner.translation);
    }

    #[test]
    fn reported_pose_trails_then_converges() {
        let mut arm = arm_at_origin();
        let owner = Transform::from_translation(Vec3::new(100.0, 0.0, 0.0));
        let target = arm.target_transform(&owner);

        arm.step_lag(&target, 1.0 / 60.0);
        let after_one = arm.reported_transform().translation.x;
        assert!(after_one > 0.0 && after_one < 100.0, "lag must trail");

        for _ in 0..600 {
            arm.step_lag(&target, 1.0 / 60.0);
        }
        let settled = arm.reported_transform().translation;
        assert!(settled.abs_diff_eq(owner.translation, 0.01));
    }

    #[test]
    fn disabled_lag_snaps_to_target() {
        let rules = AttachmentRules {
            position_lag: false,
            rotation_lag: false,
            ..AttachmentRules::default()
        };
        let mut arm = PivotArm::new(
            10.0,
            -0.5,
            rules,
            10.0,
            10.0,
            &Transform::default(),
        );
        arm.add_yaw(1.0);
        let owner = Transform::from_translation(Vec3::new(7.0, 7.0, 0.0));
        let target = arm.target_transform(&owner);
        arm.step_lag(&target, 1.0 / 60.0);
        assert_eq!(*arm.reported_transform(), target);
    }

    #[test]
    fn end_position_hangs_behind_the_pivot() {
        let arm = arm_at_origin();
        // Level arm looking along +X: the viewpoint sits 10 behind.
        assert!(arm
            .end_position()
            .abs_diff_eq(Vec3::new(-10.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn length_interpolation_is_gradual() {
        let mut arm = arm_at_origin();
        arm.interp_length_toward(20.0, 1.0 / 60.0, 5.0);
        let len = arm.arm_length();
        assert!(len > 10.0 && len < 20.0);
    }
}
