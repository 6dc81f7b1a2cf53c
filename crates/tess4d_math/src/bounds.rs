//! Axis-aligned bounding box in 3D
//!
//! Recomputed after every projection so the renderer can frame the shape.

use serde::{Serialize, Deserialize};

/// An axis-aligned box spanning `min..=max` on each axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Aabb3 {
    /// Create a box from its corners
    #[inline]
    pub const fn new(min: [f32; 3], max: [f32; 3]) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` for no points
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a [f32; 3]>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self::new(first, first), |mut bbox, p| {
            for axis in 0..3 {
                bbox.min[axis] = bbox.min[axis].min(p[axis]);
                bbox.max[axis] = bbox.max[axis].max(p[axis]);
            }
            bbox
        }))
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> [f32; 3] {
        [
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
            (self.min[2] + self.max[2]) * 0.5,
        ]
    }

    /// Edge lengths along each axis
    #[inline]
    pub fn extent(&self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    /// Radius of the sphere through the box corners, around the center
    pub fn radius(&self) -> f32 {
        let [ex, ey, ez] = self.extent();
        0.5 * (ex * ex + ey * ey + ez * ez).sqrt()
    }
}
