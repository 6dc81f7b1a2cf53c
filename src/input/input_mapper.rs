//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like ToggleProjection, Exit, etc.
//! Plane selection keys (1-9, Space) are NOT mapped here - they go directly to RotationController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not plane selection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Switch between stereographic and orthographic projection (0 key)
    ToggleProjection,
    /// Undo all rotation (R key)
    Reset,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Exit application (Escape)
    Exit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Digit0 | KeyCode::Numpad0 => Some(InputAction::ToggleProjection),
            KeyCode::KeyR => Some(InputAction::Reset),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }
}
