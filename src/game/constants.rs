//! Game constants
//!
//! Screen size and the fixed rules of a round.

use super::entity::SpeedTier;

/// Logical screen width in pixels
pub const SCREEN_WIDTH: i32 = 800;

/// Logical screen height in pixels
pub const SCREEN_HEIGHT: i32 = 600;

/// Length of a round in seconds
pub const GAME_DURATION_SECS: i32 = 60;

/// Chance per tick that the spawner adds an entity
pub const SPAWN_CHANCE: f64 = 0.05;

/// Maximum number of live entities
pub const MAX_ENTITIES: usize = 10;

/// Chance that a spawned entity is a hornet
pub const HORNET_CHANCE: f64 = 0.2;

/// Chance that a spawned entity is fast
pub const HIGH_SPEED_CHANCE: f64 = 0.1;

/// Per-axis speed bound for normal entities (pixels per tick)
pub const NORMAL_SPEED: f32 = 2.0;

/// Per-axis speed bound for fast entities (pixels per tick)
pub const HIGH_SPEED: f32 = 5.0;

/// Hornet hits that end the round
pub const MAX_PENALTIES: u32 = 3;

/// How long the lightning flash stays up after a sting (ticks)
pub const EFFECT_TICKS: u32 = 30;

/// Points for catching a normal bee
pub const NORMAL_BEE_POINTS: u32 = 1;

/// Points for catching a fast bee
pub const HIGH_BEE_POINTS: u32 = 3;

/// The tunables a round is played with.
///
/// There is no runtime configuration; `Rules::default()` is built from the
/// constants above. Tests construct variants directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub screen_width: i32,
    pub screen_height: i32,
    pub duration_secs: i32,
    pub spawn_chance: f64,
    pub max_entities: usize,
    pub hornet_chance: f64,
    pub high_speed_chance: f64,
    pub normal_speed: f32,
    pub high_speed: f32,
    pub normal_bee_points: u32,
    pub high_bee_points: u32,
    pub max_penalties: u32,
    pub effect_ticks: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            duration_secs: GAME_DURATION_SECS,
            spawn_chance: SPAWN_CHANCE,
            max_entities: MAX_ENTITIES,
            hornet_chance: HORNET_CHANCE,
            high_speed_chance: HIGH_SPEED_CHANCE,
            normal_speed: NORMAL_SPEED,
            high_speed: HIGH_SPEED,
            normal_bee_points: NORMAL_BEE_POINTS,
            high_bee_points: HIGH_BEE_POINTS,
            max_penalties: MAX_PENALTIES,
            effect_ticks: EFFECT_TICKS,
        }
    }
}

impl Rules {
    /// Upper bound of each velocity component for a tier (pixels per tick)
    pub fn speed_base(&self, tier: SpeedTier) -> f32 {
        match tier {
            SpeedTier::Normal => self.normal_speed,
            SpeedTier::High => self.high_speed,
        }
    }

    /// Points for catching a bee of a tier
    pub fn bee_points(&self, tier: SpeedTier) -> u32 {
        match tier {
            SpeedTier::Normal => self.normal_bee_points,
            SpeedTier::High => self.high_bee_points,
        }
    }
}
