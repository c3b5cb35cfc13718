//! The input-source collaborator contract.

use glam::Vec2;

/// On-demand queries the rig makes against the host's input pipeline.
///
/// Axis and button *events* are pushed into the controller separately (see
/// [`RigInputEvent`](super::RigInputEvent)); this trait covers only what the
/// per-step update pulls on demand. A host that is not ready yet simply
/// passes no source — the controller's bind retry tolerates that (the input
/// pipeline may come up after the character does, particularly with a
/// server-authoritative host spawning remote characters first).
pub trait InputSource {
    /// This frame's pointer motion delta, in pointer counts.
    fn pointer_delta(&self) -> Vec2;
}
