//! Entity spawner
//!
//! Rolls once per tick for a new bee or hornet. Every random draw goes
//! through the caller's RNG so a seeded generator replays a round exactly.

use rand::Rng;
use super::constants::Rules;
use super::entity::{Entity, EntityKind, SpeedTier};

/// Pixel size of the two sprites, taken from the decoded images at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSizes {
    pub bee: (u32, u32),
    pub hornet: (u32, u32),
}

impl SpriteSizes {
    pub fn new(bee: (u32, u32), hornet: (u32, u32)) -> Self {
        Self { bee, hornet }
    }

    /// Hitbox for a kind: half the sprite on each axis.
    pub fn hitbox(&self, kind: EntityKind) -> (i32, i32) {
        let (w, h) = match kind {
            EntityKind::Bee => self.bee,
            EntityKind::Hornet => self.hornet,
        };
        ((w / 2) as i32, (h / 2) as i32)
    }
}

/// Maybe spawn one entity. Returns the index of the new entity, if any.
pub fn maybe_spawn<R: Rng + ?Sized>(
    entities: &mut Vec<Entity>,
    sprites: &SpriteSizes,
    rules: &Rules,
    rng: &mut R,
) -> Option<usize> {
    if rng.gen::<f64>() < rules.spawn_chance && entities.len() < rules.max_entities {
        entities.push(spawn(sprites, rules, rng));
        Some(entities.len() - 1)
    } else {
        None
    }
}

/// Build a fresh entity at a random on-screen position.
pub fn spawn<R: Rng + ?Sized>(sprites: &SpriteSizes, rules: &Rules, rng: &mut R) -> Entity {
    let kind = if rng.gen::<f64>() < rules.hornet_chance {
        EntityKind::Hornet
    } else {
        EntityKind::Bee
    };
    let tier = if rng.gen::<f64>() < rules.high_speed_chance {
        SpeedTier::High
    } else {
        SpeedTier::Normal
    };

    let (width, height) = sprites.hitbox(kind);
    let x = rng.gen_range(0..(rules.screen_width - width).max(1)) as f32;
    let y = rng.gen_range(0..(rules.screen_height - height).max(1)) as f32;

    let base = rules.speed_base(tier);
    let vx = (rng.gen::<f32>() * 2.0 - 1.0) * base;
    let vy = (rng.gen::<f32>() * 2.0 - 1.0) * base;

    Entity::new(kind, tier, x, y, width, height).with_velocity(vx, vy)
}
