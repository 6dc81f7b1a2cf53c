//! Rotation input handling
//!
//! This crate turns key presses into the active 4D rotation plane and
//! per-frame rotation angles for the tesseract viewer.

mod rotation_controller;

pub use rotation_controller::{RotationController, RotationTarget};
