//! Per-frame input snapshot
//!
//! The state machine never talks to macroquad directly. The driver polls
//! the pointer and clock once per frame into a `FrameInput` and hands that
//! to `GameState::tick`.

use macroquad::input::{is_mouse_button_pressed, mouse_position, MouseButton};
use macroquad::time::get_time;

/// Everything one tick needs from the outside world.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Pointer position in screen pixels
    pub pointer: (i32, i32),
    /// True only on the frame the primary button goes from released to pressed
    pub pressed: bool,
    /// Clock in seconds (monotonic, arbitrary origin)
    pub now: f64,
}

impl FrameInput {
    /// A frame with no press at the given time.
    #[cfg(test)]
    pub fn idle(now: f64) -> Self {
        Self { pointer: (0, 0), pressed: false, now }
    }

    /// A press edge at `(x, y)` at the given time.
    #[cfg(test)]
    pub fn press(x: i32, y: i32, now: f64) -> Self {
        Self { pointer: (x, y), pressed: true, now }
    }

    /// Read the current frame's pointer and clock from macroquad.
    pub fn poll() -> Self {
        let (mx, my) = mouse_position();
        Self {
            pointer: (mx as i32, my as i32),
            pressed: is_mouse_button_pressed(MouseButton::Left),
            now: get_time(),
        }
    }
}
