//! The camera rig controller: drives the pivot arm and lens from
//! accumulated player input.
//!
//! Input events mutate two small pieces of state (the rotate-mode flag and
//! the requested zoom distance); the per-step [`update`] reads that state,
//! interpolates the arm's actual length, and, while rotate mode is held,
//! applies an immediate yaw delta from the pointer.
//!
//! [`update`]: CameraRigController::update

use glam::{FloatExt, Vec3};

use crate::error::RigError;
use crate::input::{InputBindings, InputSource, RigInputEvent};
use crate::options::Options;
use crate::rig::command::RigCommand;
use crate::rig::lens::Lens;
use crate::rig::pivot_arm::{AttachmentRules, PivotArm};
use crate::rig::transform::{flattened_xy, Transform};
use crate::util::one_shot::OneShot;

/// Degrees of yaw per pointer count while rotate mode is held.
const ROTATE_SPEED_MULTIPLIER: f32 = 3.0;

/// Zoom inputs with a smaller magnitude are treated as jitter and dropped.
const ZOOM_INPUT_EPSILON: f32 = 1e-4;

/// Seconds between input-bind attempts while the pipeline is absent.
const INPUT_BIND_RETRY_DELAY: f32 = 0.25;

/// Third-person camera rig: owns a [`PivotArm`] and [`Lens`] and steers
/// them from player zoom/rotate input.
///
/// One controller per controlled character. All state is owned exclusively
/// by the controller and touched from the host's single logical simulation
/// thread; the character itself is not stored — its root transform is
/// passed into [`update`](Self::update) each step.
pub struct CameraRigController {
    options: Options,
    arm: PivotArm,
    lens: Lens,
    /// Target distance the length interpolator chases each step. Always in
    /// `[min_arm_length, max_arm_length]`.
    requested_zoom_level: f32,
    rotate_mode_active: bool,
    /// Installed once binding succeeds; `None` means input is ignored.
    bindings: Option<InputBindings>,
    bind_retry: OneShot,
}

impl CameraRigController {
    /// Construct the rig for a character whose root is at `owner_root`.
    ///
    /// The arm starts at `max_arm_length` (which is also the initial zoom
    /// target) with a world pitch of `lerp(0°, -90°, default_angle)` and
    /// zero yaw, and its lagged pose snapped so the first frame does not
    /// swing in.
    ///
    /// # Errors
    ///
    /// Fails fast with [`RigError::InvalidOptions`] on a configuration the
    /// rig has no valid behavior for — there is no degraded mode.
    pub fn new(
        options: Options,
        owner_root: &Transform,
    ) -> Result<Self, RigError> {
        options.validate()?;

        let pitch = 0.0_f32
            .lerp(-90.0, options.rig.default_angle)
            .to_radians();
        let arm = PivotArm::new(
            options.rig.max_arm_length,
            pitch,
            AttachmentRules::default(),
            options.rig.position_lag_speed,
            options.rig.rotation_lag_speed,
            owner_root,
        );
        let lens = Lens::new(&options.lens);
        let requested_zoom_level = options.rig.max_arm_length;

        Ok(Self {
            options,
            arm,
            lens,
            requested_zoom_level,
            rotate_mode_active: false,
            bindings: None,
            bind_retry: OneShot::idle(),
        })
    }

    // ── Input binding ────────────────────────────────────────────────────

    /// Install the configured event bindings.
    ///
    /// Call only on the instance that represents the locally interactive
    /// viewpoint; remotely observed characters never bind and their
    /// controllers ignore input events.
    ///
    /// When the host's input pipeline is not up yet (`source` is `None` —
    /// bind order versus character setup is not guaranteed, particularly
    /// with a server-authoritative host), the controller defers and retries
    /// every 0.25 simulation-seconds from [`update`](Self::update) until a
    /// source exists. Dropping the controller discards any pending retry.
    pub fn bind_inputs(&mut self, source: Option<&dyn InputSource>) {
        if self.bindings.is_some() {
            return;
        }
        if source.is_none() {
            log::debug!(
                "input source not available; retrying bind in \
                 {INPUT_BIND_RETRY_DELAY}s"
            );
            self.bind_retry.schedule(INPUT_BIND_RETRY_DELAY);
            return;
        }
        self.bindings =
            Some(InputBindings::from_options(&self.options.bindings));
        self.bind_retry.cancel();
        log::info!("camera rig input bound");
    }

    /// Whether the event bindings have been installed.
    #[must_use]
    pub fn is_input_bound(&self) -> bool {
        self.bindings.is_some()
    }

    /// Feed a raw input event through the binding map.
    ///
    /// Events arriving before binding succeeds (or on a never-bound remote
    /// instance) are dropped.
    pub fn handle_event(&mut self, event: &RigInputEvent<'_>) {
        let command = self
            .bindings
            .as_ref()
            .and_then(|bindings| bindings.resolve(event));
        if let Some(command) = command {
            self.execute(command);
        }
    }

    /// Execute a rig command. Bound input and programmatic callers share
    /// this entry point.
    pub fn execute(&mut self, command: RigCommand) {
        match command {
            RigCommand::Zoom { delta } => self.on_zoom_input(delta),
            RigCommand::EnterRotateMode => self.rotate_mode_active = true,
            RigCommand::ExitRotateMode => self.rotate_mode_active = false,
        }
    }

    /// Accumulate a zoom delta into the requested zoom level.
    ///
    /// Only the target moves here; the arm's actual length chases it lazily
    /// in [`update`](Self::update).
    fn on_zoom_input(&mut self, delta: f32) {
        if delta.abs() < ZOOM_INPUT_EPSILON {
            return;
        }
        self.requested_zoom_level = (self.requested_zoom_level + delta)
            .clamp(
                self.options.rig.min_arm_length,
                self.options.rig.max_arm_length,
            );
    }

    // ── Per-step update ──────────────────────────────────────────────────

    /// Advance the rig by one simulation step.
    ///
    /// `owner_root` is the controlled character's current root transform;
    /// `source` is the host's input pipeline, if it exists this frame.
    /// While rotate mode is held, this frame's pointer delta is queried
    /// from the source and applied as a direct yaw increment (no smoothing
    /// of its own); the arm length then takes one exponential-approach step
    /// toward the requested zoom level, and the arm's lagged pose advances.
    pub fn update(
        &mut self,
        dt: f32,
        owner_root: &Transform,
        source: Option<&dyn InputSource>,
    ) {
        if self.bind_retry.tick(dt) {
            self.bind_inputs(source);
        }

        if self.rotate_mode_active {
            if let Some(source) = source {
                let delta = source.pointer_delta();
                self.arm.add_yaw(
                    (delta.x * ROTATE_SPEED_MULTIPLIER).to_radians(),
                );
            }
        }

        self.arm.interp_length_toward(
            self.requested_zoom_level,
            dt,
            self.options.rig.zoom_interp_speed,
        );

        let target = self.arm.target_transform(owner_root);
        self.arm.step_lag(&target, dt);
    }

    // ── Query surface ────────────────────────────────────────────────────

    /// Whether rotate mode is currently held.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.rotate_mode_active
    }

    /// The target distance the length interpolator is chasing.
    #[must_use]
    pub fn requested_zoom_level(&self) -> f32 {
        self.requested_zoom_level
    }

    /// Read-only access to the pivot arm.
    #[must_use]
    pub fn pivot_arm(&self) -> &PivotArm {
        &self.arm
    }

    /// Read-only access to the lens.
    #[must_use]
    pub fn lens(&self) -> &Lens {
        &self.lens
    }

    /// World pose of the lens for the rendering collaborator.
    #[must_use]
    pub fn lens_world_transform(&self) -> Transform {
        self.lens.world_transform(&self.arm)
    }

    /// The lens forward direction projected onto the XY plane and
    /// renormalized.
    ///
    /// Boundary condition: when the lens looks exactly vertically, nothing
    /// remains after flattening and the zero vector is returned — callers
    /// must not assume a unit result in that degenerate case.
    #[must_use]
    pub fn forward_vector_xy(&self) -> Vec3 {
        flattened_xy(self.lens.forward(&self.arm))
    }
}
