//! Flying entities
//!
//! Bees and hornets share one struct. Position and velocity are floats in
//! screen pixels; the hitbox is an integer rectangle anchored at the
//! top-left corner, half the size of the drawn sprite.

/// What the player clicked on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Bee,
    Hornet,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Bee => "bee",
            EntityKind::Hornet => "hornet",
        }
    }
}

/// Speed tier, picked once at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedTier {
    #[default]
    Normal,
    High,
}

/// A moving, clickable game object.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Hitbox width
    pub width: i32,
    /// Hitbox height
    pub height: i32,
    pub kind: EntityKind,
    pub tier: SpeedTier,
    /// Cleared when clicked; invisible entities are compacted away at the end of the tick
    pub visible: bool,
}

impl Entity {
    pub fn new(kind: EntityKind, tier: SpeedTier, x: f32, y: f32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            width,
            height,
            kind,
            tier,
            visible: true,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    /// Closed-box containment test: points on the edge count as hits.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        let (px, py) = (px as f32, py as f32);
        px >= self.x
            && px <= self.x + self.width as f32
            && py >= self.y
            && py <= self.y + self.height as f32
    }
}
