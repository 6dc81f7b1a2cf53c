//! Tesseract mesh generation for the Tess4D viewer
//!
//! This crate turns a 4D hypercube into something a 3D renderer can draw:
//!
//! - [`HypercubeMesh`] - The 192-vertex tesseract mesh and its 3D buffers
//! - [`Projection`] - Stereographic or orthographic 4D -> 3D flattening
//! - [`rotation`] - Plane and double-plane rotation of 4D vertex buffers
//! - [`tables`] - Corner, face and color tables of the tesseract
//! - [`MeshError`] - Construction errors

mod error;
mod mesh;
mod projection;
pub mod rotation;
pub mod tables;

pub use error::MeshError;
pub use mesh::HypercubeMesh;
pub use projection::{Projection, DEFAULT_LIGHT_DISTANCE, MIN_DENOMINATOR};

// Re-export commonly used types from tess4d_math for convenience
pub use tess4d_math::{Aabb3, Axis, RotationPlane, Vec4};
