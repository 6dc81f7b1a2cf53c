//! Tess4D - Tesseract Viewer
//!
//! Library half of the viewer binary: configuration, input mapping and the
//! window, simulation and render systems.

pub mod config;
pub mod input;
pub mod systems;
