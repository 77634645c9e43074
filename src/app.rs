//! Application state and frame driver
//!
//! Owns the game, the uploaded textures and the RNG. Each frame the main
//! loop polls input, calls `update` then `draw`, and waits out the rest of
//! the frame budget so entity speeds (pixels per tick) stay constant.

use log::Level;
use macroquad::time::get_time;
use rand::rngs::StdRng;
use crate::assets::Assets;
use crate::game::{GameEvent, GameState};
use crate::input::FrameInput;
use crate::render;

/// Ticks per second the game is tuned for
pub const TICKS_PER_SECOND: f64 = 60.0;

/// Target frame time in seconds
pub const FRAME_TIME: f64 = 1.0 / TICKS_PER_SECOND;

pub struct AppState {
    pub game: GameState,
    pub assets: Assets,
    rng: StdRng,
}

impl AppState {
    pub fn new(assets: Assets, rng: StdRng) -> Self {
        let game = GameState::new(assets.sprite_sizes());
        Self { game, assets, rng }
    }

    /// Advance the game one tick and log what happened.
    pub fn update(&mut self, input: &FrameInput) {
        self.game.tick(input, &mut self.rng);
        for event in self.game.events.drain() {
            log::log!(event_level(&event), "{}", event);
        }
    }

    /// Compose and draw the current frame.
    pub fn draw(&mut self) {
        let frame = render::compose(&self.game, &mut self.rng);
        render::present(&frame, &self.assets);
    }
}

/// Routine per-tick chatter goes to debug, round milestones to info.
pub fn event_level(event: &GameEvent) -> Level {
    match event {
        GameEvent::Spawned { .. } | GameEvent::Missed { .. } => Level::Debug,
        GameEvent::BeeCaught { .. } | GameEvent::HornetHit { .. } => Level::Debug,
        GameEvent::Started | GameEvent::Restarted | GameEvent::GameOver { .. } => Level::Info,
    }
}

/// Sleep, then spin, until `FRAME_TIME` has passed since `frame_start`.
pub fn wait_for_frame(frame_start: f64) {
    let remaining = FRAME_TIME - (get_time() - frame_start);
    if remaining <= 0.0 {
        return;
    }

    // Sleep for the bulk, spin the last couple of milliseconds for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002;
        while get_time() - frame_start + spin_margin < FRAME_TIME {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
    }
    while get_time() - frame_start < FRAME_TIME {
        std::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::SpeedTier;
    use crate::game::event::GameOverReason;

    #[test]
    fn test_event_levels() {
        assert_eq!(event_level(&GameEvent::Started), Level::Info);
        assert_eq!(
            event_level(&GameEvent::GameOver { reason: GameOverReason::TooManyStings, score: 0 }),
            Level::Info
        );
        assert_eq!(
            event_level(&GameEvent::BeeCaught { tier: SpeedTier::Normal, points: 1, score: 1 }),
            Level::Debug
        );
        assert_eq!(event_level(&GameEvent::Missed { x: 0, y: 0 }), Level::Debug);
    }
}
