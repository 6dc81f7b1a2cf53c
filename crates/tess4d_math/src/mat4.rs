//! 4x4 Matrix utilities for 4D rotations
//!
//! Matrices are column-major: `m[col][row]`. Column `i` is the image of
//! basis vector `i`.

use crate::{Axis, Vec4};

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in a specific 2D plane within 4D space.
///
/// The rotation turns `a` towards `b`: a quarter turn maps the `a` basis
/// vector onto the `b` basis vector.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `a`, `b` - The axes spanning the rotation plane
///
/// # Example
/// ```
/// use tess4d_math::{Axis, mat4::plane_rotation};
/// let xw = plane_rotation(0.5, Axis::X, Axis::W);
/// assert_eq!(xw[1][1], 1.0); // Y untouched
/// ```
pub fn plane_rotation(angle: f32, a: Axis, b: Axis) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    let (p1, p2) = (a.index(), b.index());

    let mut m = IDENTITY;
    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Multiply two matrices: the result applies `b` first, then `a`
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a vector by a matrix
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}
