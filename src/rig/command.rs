//! The rig's complete interactive vocabulary.
//!
//! Every player-facing operation — whether produced by the input binding
//! map or constructed programmatically — is represented as a `RigCommand`
//! and passed to
//! [`CameraRigController::execute`](super::CameraRigController::execute),
//! so bound input and scripted callers share one code path.

/// A single camera-rig operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RigCommand {
    /// Adjust the requested zoom distance by a signed scroll delta.
    Zoom {
        /// Signed distance change; near-zero values are filtered.
        delta: f32,
    },
    /// Begin translating pointer motion into camera yaw.
    EnterRotateMode,
    /// Stop translating pointer motion into camera yaw.
    ExitRotateMode,
}
