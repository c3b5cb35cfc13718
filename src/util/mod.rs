//! Shared utilities for the camera rig.
//!
//! Helpers for frame-rate-independent smoothing, simulation-time one-shot
//! scheduling, and wall-clock frame timing.

pub mod frame_clock;
pub mod one_shot;
pub mod smoothing;
