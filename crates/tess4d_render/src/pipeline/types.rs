//! GPU-compatible data types for the mesh pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! The mesh itself is uploaded as three tightly packed vertex streams
//! (positions, colors, texture coordinates), so only the uniform block
//! needs a dedicated struct.

use bytemuck::{Pod, Zeroable};

/// Byte stride of one projected position (`vec3<f32>`)
pub const POSITION_STRIDE: u64 = std::mem::size_of::<[f32; 3]>() as u64;
/// Byte stride of one RGBA color (`vec4<f32>`)
pub const COLOR_STRIDE: u64 = std::mem::size_of::<[f32; 4]>() as u64;
/// Byte stride of one texture coordinate (`vec2<f32>`)
pub const TEX_COORD_STRIDE: u64 = std::mem::size_of::<[f32; 2]>() as u64;

/// Uniforms for the mesh render pass
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MeshUniforms {
    /// Combined projection * view matrix (column-major)
    pub view_proj: [[f32; 4]; 4],
}

impl Default for MeshUniforms {
    fn default() -> Self {
        Self {
            view_proj: tess4d_math::mat4::IDENTITY,
        }
    }
}

impl MeshUniforms {
    pub fn new(view_proj: [[f32; 4]; 4]) -> Self {
        Self { view_proj }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_mesh_uniforms_size() {
        // mat4x4<f32> = 64 bytes
        assert_eq!(size_of::<MeshUniforms>(), 64);
    }

    #[test]
    fn test_strides() {
        assert_eq!(POSITION_STRIDE, 12);
        assert_eq!(COLOR_STRIDE, 16);
        assert_eq!(TEX_COORD_STRIDE, 8);
    }

    #[test]
    fn test_default_is_identity() {
        let uniforms = MeshUniforms::default();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(uniforms.view_proj[i][j], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_bytes_round_trip() {
        let uniforms = MeshUniforms::new([[2.0; 4]; 4]);
        let bytes = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 64);
        let back: &MeshUniforms = bytemuck::from_bytes(bytes);
        assert_eq!(back.view_proj, uniforms.view_proj);
    }
}
