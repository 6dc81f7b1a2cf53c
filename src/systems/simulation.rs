//! Simulation system
//!
//! Advances the tesseract each frame:
//! - Delta time calculation
//! - Rotation in the active plane
//! - Dirty tracking of the projected positions

use std::time::Instant;

use tess4d_core::HypercubeMesh;
use tess4d_input::RotationController;

/// Longest frame the simulation will step, in seconds
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Result of a simulation update
pub struct SimulationResult {
    /// Whether the 3D positions changed and must be re-uploaded
    pub positions_dirty: bool,
    /// Seconds simulated this frame (after capping)
    pub dt: f32,
}

/// Manages the per-frame simulation
pub struct SimulationSystem {
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Run one simulation frame using wall-clock time
    pub fn update(
        &mut self,
        mesh: &mut HypercubeMesh,
        controller: &RotationController,
    ) -> SimulationResult {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        Self::step(mesh, controller, raw_dt)
    }

    /// Run one simulation frame of `raw_dt` seconds
    ///
    /// The step is capped at [`MAX_FRAME_TIME`] so a stalled window doesn't
    /// make the tesseract jump.
    pub fn step(
        mesh: &mut HypercubeMesh,
        controller: &RotationController,
        raw_dt: f32,
    ) -> SimulationResult {
        let dt = raw_dt.clamp(0.0, MAX_FRAME_TIME);

        controller.update(mesh, dt);

        SimulationResult {
            positions_dirty: mesh.take_positions_dirty(),
            dt,
        }
    }

    /// Forget the time spent paused so the next frame starts fresh
    pub fn reset_clock(&mut self) {
        self.last_frame = Instant::now();
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tess4d_core::RotationPlane;

    #[test]
    fn test_delta_time_capped() {
        let mut mesh = HypercubeMesh::default();
        mesh.take_positions_dirty();
        let controller = RotationController::new().with_plane(RotationPlane::XW);

        let result = SimulationSystem::step(&mut mesh, &controller, 5.0);
        assert_eq!(result.dt, MAX_FRAME_TIME);
        assert!(result.positions_dirty);
    }

    #[test]
    fn test_idle_frame_is_clean() {
        let mut mesh = HypercubeMesh::default();
        mesh.take_positions_dirty();
        let controller = RotationController::new();

        let result = SimulationSystem::step(&mut mesh, &controller, 0.016);
        assert!(!result.positions_dirty);
    }

    #[test]
    fn test_toggle_between_frames_is_reported() {
        let mut mesh = HypercubeMesh::default();
        mesh.take_positions_dirty();
        mesh.toggle_projection();

        let result = SimulationSystem::step(&mut mesh, &RotationController::new(), 0.016);
        assert!(result.positions_dirty);
    }

    #[test]
    fn test_step_matches_direct_rotation() {
        let mut stepped = HypercubeMesh::default();
        let mut direct = HypercubeMesh::default();
        let controller = RotationController::new()
            .with_plane(RotationPlane::YZXW)
            .with_angular_rate(30.0);

        SimulationSystem::step(&mut stepped, &controller, 0.1);
        direct.rotate(3.0, RotationPlane::YZXW);
        for (a, b) in stepped.vertices_4d().iter().zip(direct.vertices_4d()) {
            assert!(a.distance(*b) < 0.0001, "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert!(sim.last_frame.elapsed().as_millis() < 100);
    }
}
