//! Game state machine
//!
//! One `GameState` lives for the whole process. The driver calls `tick`
//! once per frame with a fresh `FrameInput`; rendering only reads the state.
//!
//! Phases:
//! - `NotStarted`: title screen, first press starts the clock
//! - `Playing`: timer, spawner, effect countdown, motion, click, compaction
//! - `Over`: score screen, a press resets everything and starts a new round

use rand::Rng;
use crate::input::FrameInput;
use super::constants::Rules;
use super::entity::{Entity, EntityKind};
use super::event::{EventQueue, GameEvent, GameOverReason};
use super::motion;
use super::spawner::{self, SpriteSizes};

/// Round phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Playing,
    Over,
}

pub struct GameState {
    pub phase: Phase,
    pub score: u32,
    /// Hornets clicked this round
    pub penalties: u32,
    /// Whole seconds left, never negative
    pub remaining_secs: i32,
    /// Lightning flash after a sting
    pub effect_active: bool,
    /// Ticks left on the flash
    pub effect_timer: i32,
    /// Live entities in spawn order
    pub entities: Vec<Entity>,
    /// What happened since the driver last drained
    pub events: EventQueue<GameEvent>,
    start_time: f64,
    sprites: SpriteSizes,
    rules: Rules,
}

impl GameState {
    pub fn new(sprites: SpriteSizes) -> Self {
        Self::with_rules(sprites, Rules::default())
    }

    pub fn with_rules(sprites: SpriteSizes, rules: Rules) -> Self {
        Self {
            phase: Phase::NotStarted,
            score: 0,
            penalties: 0,
            remaining_secs: rules.duration_secs,
            effect_active: false,
            effect_timer: 0,
            entities: Vec::new(),
            events: EventQueue::new(),
            start_time: 0.0,
            sprites,
            rules,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Advance one frame.
    pub fn tick<R: Rng + ?Sized>(&mut self, input: &FrameInput, rng: &mut R) {
        match self.phase {
            Phase::NotStarted => {
                if input.pressed {
                    self.phase = Phase::Playing;
                    self.start_time = input.now;
                    self.events.send(GameEvent::Started);
                }
            }
            Phase::Over => {
                if input.pressed {
                    self.reset(input.now);
                    self.events.send(GameEvent::Restarted);
                }
            }
            Phase::Playing => self.tick_playing(input, rng),
        }
    }

    /// Clear the round and start the clock again.
    pub fn reset(&mut self, now: f64) {
        self.entities.clear();
        self.score = 0;
        self.penalties = 0;
        self.phase = Phase::Playing;
        self.start_time = now;
        self.remaining_secs = self.rules.duration_secs;
        self.effect_active = false;
        self.effect_timer = 0;
    }

    fn tick_playing<R: Rng + ?Sized>(&mut self, input: &FrameInput, rng: &mut R) {
        let elapsed = (input.now - self.start_time).max(0.0).floor() as i32;
        self.remaining_secs = self.rules.duration_secs - elapsed;
        if self.remaining_secs <= 0 {
            self.remaining_secs = 0;
            self.end(GameOverReason::TimeUp);
            return;
        }

        if let Some(i) = spawner::maybe_spawn(&mut self.entities, &self.sprites, &self.rules, rng) {
            let e = &self.entities[i];
            self.events.send(GameEvent::Spawned { kind: e.kind, tier: e.tier, x: e.x, y: e.y });
        }

        if self.effect_active {
            self.effect_timer -= 1;
            if self.effect_timer <= 0 {
                self.effect_active = false;
            }
        }

        motion::advance(&mut self.entities, self.rules.screen_width, self.rules.screen_height);

        if input.pressed {
            self.handle_press(input.pointer.0, input.pointer.1);
        }

        motion::compact(&mut self.entities);
    }

    fn handle_press(&mut self, x: i32, y: i32) {
        let Some(i) = motion::hit_test(&self.entities, x, y) else {
            self.events.send(GameEvent::Missed { x, y });
            return;
        };

        let hit = &mut self.entities[i];
        hit.visible = false;
        let (kind, tier) = (hit.kind, hit.tier);

        match kind {
            EntityKind::Hornet => {
                self.penalties += 1;
                self.effect_active = true;
                self.effect_timer = self.rules.effect_ticks as i32;
                self.events.send(GameEvent::HornetHit { penalties: self.penalties });
                if self.penalties >= self.rules.max_penalties {
                    self.end(GameOverReason::TooManyStings);
                }
            }
            EntityKind::Bee => {
                let points = self.rules.bee_points(tier);
                self.score += points;
                self.events.send(GameEvent::BeeCaught { tier, points, score: self.score });
            }
        }
    }

    fn end(&mut self, reason: GameOverReason) {
        self.phase = Phase::Over;
        self.events.send(GameEvent::GameOver { reason, score: self.score });
    }
}
