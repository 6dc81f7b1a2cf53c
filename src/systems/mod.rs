//! Application systems
//!
//! The window, simulation and rendering halves of the viewer, kept apart so
//! each can be tested on its own.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{SimulationResult, SimulationSystem, MAX_FRAME_TIME};
pub use window::{WindowError, WindowSystem};
