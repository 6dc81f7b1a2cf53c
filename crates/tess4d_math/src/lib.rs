//! 4D Mathematics Library
//!
//! Small, dependency-light math types shared by the Tess4D crates.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Axis`] - One of the four coordinate axes, usable as a [`Vec4`] index
//! - [`RotationPlane`] - The closed set of rotation planes a tesseract can spin in
//! - [`Mat4`] - Column-major 4x4 matrix for plane rotations
//! - [`Aabb3`] - Axis-aligned bounding box of projected 3D positions

mod vec4;
mod plane;
pub mod mat4;
pub mod bounds;

pub use vec4::{Axis, Vec4};
pub use plane::RotationPlane;
pub use mat4::Mat4;
pub use bounds::Aabb3;
