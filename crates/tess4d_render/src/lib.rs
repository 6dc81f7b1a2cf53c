//! Tesseract Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws the projected
//! tesseract mesh with flat per-cube colors.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::MeshPipeline`] - Indexed triangle rendering of the mesh buffers
//! - [`pipeline::MeshUniforms`] - View-projection uniform block

pub mod context;
pub mod pipeline;

// Re-export core types for convenience
pub use tess4d_core::{HypercubeMesh, Projection, RotationPlane, Vec4};
