// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparison: camera math compares against exact configured values
#![allow(clippy::float_cmp)]
// Tests panic by design
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Third-person camera rig controller.
//!
//! One [`rig::CameraRigController`] per player-controlled character: it
//! owns a [`rig::PivotArm`] (distance + orientation offset from the
//! character) and a [`rig::Lens`] (the viewpoint at the arm's end), and
//! drives both each simulation step from accumulated input — scroll zooms
//! the arm length smoothly, and holding the rotate button turns pointer
//! motion into camera yaw.
//!
//! # Key entry points
//!
//! - [`rig::CameraRigController`] — construction, input binding, the
//!   per-step update, and the query surface
//! - [`options::Options`] — runtime configuration (arm geometry, smoothing
//!   speeds, lens projection, input bindings) with TOML presets
//! - [`input`] — platform-agnostic events, the binding map, and the
//!   [`input::InputSource`] collaborator contract
//!
//! # Architecture
//!
//! The host scene graph, input pipeline, and renderer stay outside the
//! crate: the character's root transform and the input source are passed
//! into the per-step update, and the renderer reads the arm's lagged
//! transform and the lens matrices back out. Everything runs on the host's
//! single logical simulation thread; the only asynchrony is the deferred
//! input-bind retry, a simulation-time one-shot owned by the controller.

pub mod error;
pub mod input;
pub mod options;
pub mod rig;
pub mod util;

pub use error::RigError;
pub use rig::CameraRigController;
