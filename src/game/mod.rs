//! Game Module
//!
//! The frame-stepped bee catching game, independent of the engine:
//! - Entity: a bee or hornet with position, velocity and hitbox
//! - Spawner: random arrivals up to a cap
//! - Motion: movement, wall bounce, click hit-testing
//! - State: phases, score, stings, timer, lightning flash
//! - Event: what a tick did, for logging and tests
//!
//! Nothing here calls into macroquad; the driver feeds `FrameInput` in and
//! the renderer reads the state out.

pub mod constants;
pub mod entity;
pub mod event;
pub mod motion;
pub mod spawner;
pub mod state;

pub use constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
pub use entity::EntityKind;
pub use event::GameEvent;
pub use spawner::SpriteSizes;
pub use state::{GameState, Phase};
