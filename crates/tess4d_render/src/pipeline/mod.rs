//! Rendering pipeline components
//!
//! This module contains the render pipeline and GPU types for drawing
//! the projected tesseract.

pub mod types;
pub mod mesh_pipeline;

// Re-export types
pub use types::{MeshUniforms, POSITION_STRIDE, COLOR_STRIDE, TEX_COORD_STRIDE};

// Re-export pipeline
pub use mesh_pipeline::{MeshPipeline, perspective_matrix, look_at_matrix, view_projection};
