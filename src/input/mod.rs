//! Input handling module
//!
//! Maps the viewer's special keys to semantic actions.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
