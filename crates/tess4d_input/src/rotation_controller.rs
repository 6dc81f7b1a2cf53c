//! Rotation controller for the tesseract viewer
//!
//! Controls:
//! - 1..9: Select XY, XZ, YZ, XW, YW, ZW, XYZW, XZYW, YZXW
//! - Space: Stop rotating (select `None`)
//!
//! The selected plane keeps turning at a constant angular rate until another
//! plane is chosen.

use tess4d_core::HypercubeMesh;
use tess4d_math::RotationPlane;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Default angular rate in degrees per second
pub const DEFAULT_ANGULAR_RATE: f32 = 30.0;

/// Rotation controller for handling input
pub struct RotationController {
    plane: RotationPlane,

    // Configuration
    pub angular_rate: f32, // degrees per second
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationController {
    pub fn new() -> Self {
        Self {
            plane: RotationPlane::None,
            angular_rate: DEFAULT_ANGULAR_RATE,
        }
    }

    /// The plane bound to a key, if any
    pub fn plane_for_key(key: KeyCode) -> Option<RotationPlane> {
        match key {
            KeyCode::Digit1 => Some(RotationPlane::XY),
            KeyCode::Digit2 => Some(RotationPlane::XZ),
            KeyCode::Digit3 => Some(RotationPlane::YZ),
            KeyCode::Digit4 => Some(RotationPlane::XW),
            KeyCode::Digit5 => Some(RotationPlane::YW),
            KeyCode::Digit6 => Some(RotationPlane::ZW),
            KeyCode::Digit7 => Some(RotationPlane::XYZW),
            KeyCode::Digit8 => Some(RotationPlane::XZYW),
            KeyCode::Digit9 => Some(RotationPlane::YZXW),
            KeyCode::Space => Some(RotationPlane::None),
            _ => None,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key selects a plane. Only presses change the plane.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let Some(plane) = Self::plane_for_key(key) else {
            return false;
        };
        if state == ElementState::Pressed {
            self.plane = plane;
        }
        true
    }

    /// Angle to rotate by for a frame of `dt` seconds
    #[inline]
    pub fn frame_angle(&self, dt: f32) -> f32 {
        self.angular_rate * dt
    }

    /// Rotate the target by this frame's angle in the active plane
    ///
    /// Returns true if the target changed.
    pub fn update<T: RotationTarget>(&self, target: &mut T, dt: f32) -> bool {
        if self.plane.is_none() {
            return false;
        }
        target.rotate(self.frame_angle(dt), self.plane)
    }

    /// Currently selected plane
    #[inline]
    pub fn plane(&self) -> RotationPlane {
        self.plane
    }

    pub fn set_plane(&mut self, plane: RotationPlane) {
        self.plane = plane;
    }

    /// Check if a rotation plane is selected
    pub fn is_rotating(&self) -> bool {
        !self.plane.is_none()
    }

    /// Builder: set angular rate in degrees per second
    pub fn with_angular_rate(mut self, rate: f32) -> Self {
        self.angular_rate = rate;
        self
    }

    /// Builder: set the initial plane
    pub fn with_plane(mut self, plane: RotationPlane) -> Self {
        self.plane = plane;
        self
    }
}

/// Something that can be rotated in a 4D plane
/// Allows the controller to drive the mesh or a stand-in
pub trait RotationTarget {
    fn rotate(&mut self, angle_degrees: f32, plane: RotationPlane) -> bool;
}

impl RotationTarget for HypercubeMesh {
    fn rotate(&mut self, angle_degrees: f32, plane: RotationPlane) -> bool {
        HypercubeMesh::rotate(self, angle_degrees, plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTarget {
        calls: Vec<(f32, RotationPlane)>,
    }

    impl RotationTarget for RecordingTarget {
        fn rotate(&mut self, angle_degrees: f32, plane: RotationPlane) -> bool {
            self.calls.push((angle_degrees, plane));
            true
        }
    }

    #[test]
    fn test_starts_without_rotation() {
        let controller = RotationController::new();
        assert_eq!(controller.plane(), RotationPlane::None);
        assert!(!controller.is_rotating());
        assert_eq!(controller.angular_rate, 30.0);
    }

    #[test]
    fn test_digit_keys_select_planes() {
        let digits = [
            KeyCode::Digit1,
            KeyCode::Digit2,
            KeyCode::Digit3,
            KeyCode::Digit4,
            KeyCode::Digit5,
            KeyCode::Digit6,
            KeyCode::Digit7,
            KeyCode::Digit8,
            KeyCode::Digit9,
        ];
        let mut controller = RotationController::new();
        for (key, plane) in digits.into_iter().zip(RotationPlane::ALL) {
            assert!(controller.process_keyboard(key, ElementState::Pressed));
            assert_eq!(controller.plane(), plane, "key {:?}", key);
        }
    }

    #[test]
    fn test_space_stops_rotation() {
        let mut controller = RotationController::new().with_plane(RotationPlane::XW);
        assert!(controller.process_keyboard(KeyCode::Space, ElementState::Pressed));
        assert_eq!(controller.plane(), RotationPlane::None);
    }

    #[test]
    fn test_release_keeps_plane() {
        let mut controller = RotationController::new();
        assert!(controller.process_keyboard(KeyCode::Digit4, ElementState::Released));
        assert_eq!(controller.plane(), RotationPlane::None);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut controller = RotationController::new();
        for key in [KeyCode::Digit0, KeyCode::KeyR, KeyCode::KeyF, KeyCode::Escape] {
            assert!(!controller.process_keyboard(key, ElementState::Pressed), "{:?}", key);
        }
        assert_eq!(controller.plane(), RotationPlane::None);
    }

    #[test]
    fn test_frame_angle() {
        let controller = RotationController::new().with_angular_rate(45.0);
        assert_eq!(controller.frame_angle(0.5), 22.5);
        assert_eq!(controller.frame_angle(0.0), 0.0);
    }

    #[test]
    fn test_update_drives_target() {
        let mut target = RecordingTarget::default();
        let controller = RotationController::new().with_plane(RotationPlane::XYZW);
        assert!(controller.update(&mut target, 0.1));
        assert_eq!(target.calls.len(), 1);
        assert_eq!(target.calls[0].1, RotationPlane::XYZW);
        assert!((target.calls[0].0 - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_update_without_plane_does_nothing() {
        let mut target = RecordingTarget::default();
        let controller = RotationController::new();
        assert!(!controller.update(&mut target, 0.1));
        assert!(target.calls.is_empty());
    }

    #[test]
    fn test_update_rotates_mesh() {
        let mut mesh = HypercubeMesh::default();
        let before = mesh.vertices_4d().to_vec();
        let controller = RotationController::new().with_plane(RotationPlane::ZW);
        assert!(controller.update(&mut mesh, 1.0 / 60.0));
        assert_ne!(mesh.vertices_4d(), &before[..]);
    }
}
