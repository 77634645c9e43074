//! Input handling
//!
//! Only the primary mouse button and the pointer position matter. Edge
//! detection uses macroquad's event-based `is_mouse_button_pressed`, so a
//! held button registers once.

mod state;

pub use state::FrameInput;
