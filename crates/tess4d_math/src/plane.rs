//! Rotation planes of 4D space
//!
//! In 4D, rotations happen in planes rather than around axes. There are
//! 6 elementary planes: XY, XZ, YZ, XW, YW, ZW. Two completely orthogonal
//! planes can also rotate at the same time (a double rotation); the three
//! pairs of orthogonal planes give XYZW, XZYW and YZXW.

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::mat4::{self, Mat4};
use crate::Axis;

/// The rotation values a tesseract can be spun with
///
/// Stateless: a plane only parameterizes a rotation call. `None` is the
/// "not rotating" value a host selects when the shape should stay still.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane - yaw of the 3D shadow (rotation around Z in 3D)
    XY,
    /// XZ plane - rotation around Y in 3D
    XZ,
    /// YZ plane - rotation around X in 3D
    YZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
    /// Double rotation: XY and ZW together
    XYZW,
    /// Double rotation: XZ and YW together
    XZYW,
    /// Double rotation: YZ and XW together
    YZXW,
    /// No rotation
    #[default]
    None,
}

impl RotationPlane {
    /// Every value that actually rotates, in key-binding order
    pub const ALL: [RotationPlane; 9] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::YZ,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
        RotationPlane::XYZW,
        RotationPlane::XZYW,
        RotationPlane::YZXW,
    ];

    /// The coordinate pairs this value rotates
    ///
    /// Each pair `(a, b)` turns `a` towards `b`. Double rotations return two
    /// disjoint pairs, `None` returns no pairs.
    pub const fn pairs(self) -> &'static [(Axis, Axis)] {
        use Axis::{W, X, Y, Z};
        match self {
            Self::XY => &[(X, Y)],
            Self::XZ => &[(X, Z)],
            Self::YZ => &[(Y, Z)],
            Self::XW => &[(X, W)],
            Self::YW => &[(Y, W)],
            Self::ZW => &[(Z, W)],
            Self::XYZW => &[(X, Y), (Z, W)],
            Self::XZYW => &[(X, Z), (Y, W)],
            Self::YZXW => &[(Y, Z), (X, W)],
            Self::None => &[],
        }
    }

    /// True for the simultaneous two-plane rotations
    #[inline]
    pub const fn is_double(self) -> bool {
        self.pairs().len() == 2
    }

    /// True for the "no rotation" value
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Symbolic name, as used in config files and logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::XY => "XY",
            Self::XZ => "XZ",
            Self::YZ => "YZ",
            Self::XW => "XW",
            Self::YW => "YW",
            Self::ZW => "ZW",
            Self::XYZW => "XYZW",
            Self::XZYW => "XZYW",
            Self::YZXW => "YZXW",
            Self::None => "None",
        }
    }

    /// The rotation as a column-major matrix
    ///
    /// # Arguments
    /// * `angle` - Rotation angle in radians
    pub fn matrix(self, angle: f32) -> Mat4 {
        self.pairs()
            .iter()
            .fold(mat4::IDENTITY, |m, &(a, b)| mat4::mul(mat4::plane_rotation(angle, a, b), m))
    }
}

impl fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec4;
    use std::collections::HashSet;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_elementary_planes_have_one_pair() {
        for plane in &RotationPlane::ALL[..6] {
            assert_eq!(plane.pairs().len(), 1, "{} should rotate one pair", plane);
            assert!(!plane.is_double());
        }
    }

    #[test]
    fn test_double_planes_are_disjoint() {
        for plane in &RotationPlane::ALL[6..] {
            assert!(plane.is_double(), "{} should be a double rotation", plane);
            let axes: HashSet<Axis> = plane
                .pairs()
                .iter()
                .flat_map(|&(a, b)| [a, b])
                .collect();
            assert_eq!(axes.len(), 4, "{} pairs must cover all four axes", plane);
        }
    }

    #[test]
    fn test_none_rotates_nothing() {
        assert!(RotationPlane::None.pairs().is_empty());
        assert!(RotationPlane::None.is_none());
        assert_eq!(RotationPlane::default(), RotationPlane::None);
        assert_eq!(RotationPlane::None.matrix(1.0), mat4::IDENTITY);
    }

    #[test]
    fn test_all_planes_distinct() {
        let set: HashSet<RotationPlane> = RotationPlane::ALL.iter().copied().collect();
        assert_eq!(set.len(), 9);
        assert!(!set.contains(&RotationPlane::None));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(RotationPlane::XW.to_string(), "XW");
        assert_eq!(RotationPlane::YZXW.to_string(), "YZXW");
        assert_eq!(format!("{}", RotationPlane::None), "None");
    }

    #[test]
    fn test_double_matrix_quarter_turn() {
        // XYZW: X -> Y and Z -> W at the same time
        let m = RotationPlane::XYZW.matrix(FRAC_PI_2);
        let v = mat4::transform(m, Vec4::new(1.0, 0.0, 1.0, 0.0));
        assert!(vec_approx_eq(v, Vec4::new(0.0, 1.0, 0.0, 1.0)), "got {:?}", v);
    }

    #[test]
    fn test_matrix_matches_plane_rotation() {
        let m = RotationPlane::YW.matrix(0.4);
        assert_eq!(m, mat4::plane_rotation(0.4, Axis::Y, Axis::W));
    }
}
