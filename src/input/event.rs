//! Platform-agnostic input events.
//!
//! These are fed into
//! [`CameraRigController::handle_event`](crate::rig::CameraRigController::handle_event),
//! where the installed binding map resolves them into
//! [`RigCommand`](crate::rig::RigCommand) values. Events are identified by
//! host-defined string ids so the binding map can be reconfigured without
//! touching rig code.

/// Default identifier for the continuous zoom scroll axis.
pub const SCROLL_AXIS_ID: &str = "MouseScroll";

/// Default identifier for the two-state rotate-mode button.
pub const ROTATE_BUTTON_ID: &str = "RotateCamera";

/// A raw input event delivered by the host's input collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RigInputEvent<'a> {
    /// Continuous scalar axis movement (scroll wheel).
    Axis {
        /// Host-defined axis identifier.
        id: &'a str,
        /// Signed axis value for this event.
        value: f32,
    },
    /// Two-state button transition.
    Button {
        /// Host-defined button identifier.
        id: &'a str,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}
