//! Mesh construction errors

use std::fmt;

use tess4d_math::Axis;

/// Error type for building a [`HypercubeMesh`](crate::HypercubeMesh)
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A half-extent component is zero, negative, or not finite
    NonPositiveExtent {
        axis: Axis,
        value: f32,
    },
    /// The stereographic light distance is zero, negative, or not finite
    InvalidLightDistance(f32),
    /// The light sits on or inside the sphere the corners rotate on
    LightInsideHypercube {
        light_distance: f32,
        radius: f32,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::NonPositiveExtent { axis, value } => write!(
                f,
                "Half-extent {:?} component must be positive and finite, got {}",
                axis, value
            ),
            MeshError::InvalidLightDistance(value) => {
                write!(f, "Light distance must be positive and finite, got {}", value)
            }
            MeshError::LightInsideHypercube { light_distance, radius } => write!(
                f,
                "Light distance {} must exceed the hypercube radius {}",
                light_distance, radius
            ),
        }
    }
}

impl std::error::Error for MeshError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_extent_display() {
        let err = MeshError::NonPositiveExtent { axis: Axis::Z, value: -1.0 };
        let msg = format!("{}", err);
        assert!(msg.contains("Z"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn test_light_inside_display() {
        let err = MeshError::LightInsideHypercube { light_distance: 1.5, radius: 2.0 };
        let msg = format!("{}", err);
        assert!(msg.contains("1.5"));
        assert!(msg.contains("radius 2"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let err = MeshError::InvalidLightDistance(f32::NAN);
        assert!(err.source().is_none());
        assert!(format!("{}", err).contains("NaN"));
    }
}
