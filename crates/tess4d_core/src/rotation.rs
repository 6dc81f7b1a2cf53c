//! Rotation of 4D vertex buffers
//!
//! In 4D, rotations are made within a plane, and two completely orthogonal
//! planes can turn at once (a double rotation). Rotations here operate on a
//! buffer the caller hands over, so they can be used and tested without a
//! mesh or a renderer.

use tess4d_math::{Axis, RotationPlane, Vec4};

/// Rotate one point by `angle_degrees` in `plane`
///
/// Each pair `(a, b)` of the plane is rotated counter-clockwise from `a`
/// towards `b`:
/// `a' = a cos θ - b sin θ`, `b' = a sin θ + b cos θ`.
pub fn rotate_point(v: Vec4, angle_degrees: f32, plane: RotationPlane) -> Vec4 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    rotate_pairs(v, plane.pairs(), sin, cos)
}

/// Rotate every vertex of a buffer in place
///
/// Returns `false` (leaving the buffer untouched) for [`RotationPlane::None`].
/// Repeated calls compose: the buffer itself is the accumulated rotation.
pub fn rotate_vertices(vertices: &mut [Vec4], angle_degrees: f32, plane: RotationPlane) -> bool {
    let pairs = plane.pairs();
    if pairs.is_empty() {
        return false;
    }

    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    for v in vertices.iter_mut() {
        *v = rotate_pairs(*v, pairs, sin, cos);
    }
    true
}

/// Apply the 2D rotation to each coordinate pair
///
/// Every pair reads from the unrotated `v`, so the two halves of a double
/// rotation never see each other's output.
#[inline]
fn rotate_pairs(v: Vec4, pairs: &[(Axis, Axis)], sin: f32, cos: f32) -> Vec4 {
    let mut out = v;
    for &(a, b) in pairs {
        out[a] = v[a] * cos - v[b] * sin;
        out[b] = v[a] * sin + v[b] * cos;
    }
    out
}
