//! The camera rig: controller, pivot arm, lens, and command vocabulary.
//!
//! The controller owns the arm and lens exclusively — both are constructed
//! with it and dropped with it. Everything the host touches goes through
//! the controller's input, update, and query surface.

/// Rig command vocabulary.
pub mod command;
/// The owning controller driving the rig each step.
pub mod controller;
/// The viewpoint at the end of the arm.
pub mod lens;
/// The boom connecting character and viewpoint.
pub mod pivot_arm;
/// World poses and direction helpers (Z-up).
pub mod transform;

pub use command::RigCommand;
pub use controller::CameraRigController;
pub use lens::Lens;
pub use pivot_arm::{AttachmentRules, PivotArm};
pub use transform::{flattened_xy, Transform};
