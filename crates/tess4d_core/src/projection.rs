//! 4D -> 3D projection
//!
//! The shadow of a 4D shape is 3 dimensional, like the 2D shadow of a 3D
//! shape. Two ways of casting it are supported:
//!
//! - Stereographic: a point light on the W axis at distance `L` casts the
//!   shadow, so parts of the shape closer to the light (larger `w`) appear
//!   larger. This keeps a sense of depth in the fourth dimension.
//! - Orthographic: w is simply dropped.

use serde::{Serialize, Deserialize};
use tess4d_math::Vec4;

/// Default distance of the stereographic light along +W
pub const DEFAULT_LIGHT_DISTANCE: f32 = 50.0;

/// Smallest stereographic denominator `L - w` the projection will divide by
pub const MIN_DENOMINATOR: f32 = 1.0e-3;

/// How 4D coordinates are flattened to 3D
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Projection {
    /// Perspective from a light on the W axis: `xyz * L / (L - w)`
    #[default]
    Stereographic,
    /// Drop the w coordinate
    Orthographic,
}

impl Projection {
    /// The other projection mode
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Projection::Stereographic => Projection::Orthographic,
            Projection::Orthographic => Projection::Stereographic,
        }
    }

    /// Project a single point
    ///
    /// Returns the 3D position and whether the stereographic denominator had
    /// to be clamped to [`MIN_DENOMINATOR`]. Mesh construction keeps the light
    /// outside the hypercube's circumsphere, so the clamp only engages if
    /// accumulated rounding pushes a vertex past the light.
    #[inline]
    pub fn project_point(self, v: Vec4, light_distance: f32) -> ([f32; 3], bool) {
        match self {
            Projection::Stereographic => {
                let denominator = light_distance - v.w;
                let clamped = denominator < MIN_DENOMINATOR;
                let scale = light_distance / denominator.max(MIN_DENOMINATOR);
                ([v.x * scale, v.y * scale, v.z * scale], clamped)
            }
            Projection::Orthographic => (v.xyz(), false),
        }
    }
}
