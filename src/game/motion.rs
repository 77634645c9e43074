//! Motion and click collision
//!
//! Entities move by their velocity every tick and bounce off the screen
//! edges. The bounce only flips the velocity; the position is left where it
//! landed, so an entity may sit a few pixels past the edge for one tick.

use super::entity::Entity;

/// Advance every visible entity by one tick and reflect at the screen bounds.
pub fn advance(entities: &mut [Entity], screen_width: i32, screen_height: i32) {
    for e in entities.iter_mut().filter(|e| e.visible) {
        e.x += e.vx;
        e.y += e.vy;

        if e.x <= 0.0 || e.x >= (screen_width - e.width) as f32 {
            e.vx = -e.vx;
        }
        if e.y <= 0.0 || e.y >= (screen_height - e.height) as f32 {
            e.vy = -e.vy;
        }
    }
}

/// Index of the first visible entity (in insertion order) whose hitbox
/// contains the point. Overlapping entities resolve to the earliest one.
pub fn hit_test(entities: &[Entity], px: i32, py: i32) -> Option<usize> {
    entities
        .iter()
        .position(|e| e.visible && e.contains(px, py))
}

/// Drop invisible entities, keeping the order of the rest. Returns how many were removed.
pub fn compact(entities: &mut Vec<Entity>) -> usize {
    let before = entities.len();
    entities.retain(|e| e.visible);
    before - entities.len()
}
