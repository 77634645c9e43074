//! Event System
//!
//! The state machine records what happened during a tick as events instead
//! of logging directly. The driver drains them after each tick and turns
//! them into log lines; tests read them to check what a tick did.

use std::fmt;
use super::entity::{EntityKind, SpeedTier};

/// A queue for events of a single type.
/// Events are collected during the tick and drained by the driver;
/// the inspection helpers exist for tests only.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    TimeUp,
    TooManyStings,
}

/// Something observable that happened during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// First press on the title screen
    Started,
    /// Press on the game-over screen
    Restarted,
    Spawned { kind: EntityKind, tier: SpeedTier, x: f32, y: f32 },
    BeeCaught { tier: SpeedTier, points: u32, score: u32 },
    HornetHit { penalties: u32 },
    /// Press that landed on nothing
    Missed { x: i32, y: i32 },
    GameOver { reason: GameOverReason, score: u32 },
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::TimeUp => write!(f, "time up"),
            GameOverReason::TooManyStings => write!(f, "too many stings"),
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Started => write!(f, "round started"),
            GameEvent::Restarted => write!(f, "round restarted"),
            GameEvent::Spawned { kind, tier, x, y } => {
                write!(f, "spawned {:?} {} at ({:.0}, {:.0})", tier, kind.label(), x, y)
            }
            GameEvent::BeeCaught { tier, points, score } => {
                write!(f, "caught {:?} bee: +{} (score {})", tier, points, score)
            }
            GameEvent::HornetHit { penalties } => write!(f, "stung by hornet ({} so far)", penalties),
            GameEvent::Missed { x, y } => write!(f, "missed at ({}, {})", x, y),
            GameEvent::GameOver { reason, score } => write!(f, "game over ({}), final score {}", reason, score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_and_drain() {
        let mut q = EventQueue::new();
        q.send(GameEvent::Started);
        q.send(GameEvent::HornetHit { penalties: 1 });
        assert_eq!(q.len(), 2);
        assert_eq!(q.iter().next(), Some(&GameEvent::Started));

        let drained: Vec<_> = q.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn test_display() {
        let caught = GameEvent::BeeCaught { tier: SpeedTier::High, points: 3, score: 10 };
        assert_eq!(caught.to_string(), "caught High bee: +3 (score 10)");

        let spawned = GameEvent::Spawned { kind: EntityKind::Hornet, tier: SpeedTier::Normal, x: 12.0, y: 340.0 };
        assert_eq!(spawned.to_string(), "spawned Normal hornet at (12, 340)");

        let over = GameEvent::GameOver { reason: GameOverReason::TimeUp, score: 7 };
        assert_eq!(over.to_string(), "game over (time up), final score 7");
    }
}
