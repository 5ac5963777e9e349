//! The base alien entity.

use log::trace;

use crate::combatant::{Combatant, Position};
use crate::constants::DEFAULT_HEALTH;
use crate::counter::ALIENS_CREATED;

/// An alien with a position and a health counter.
///
/// Construction is counted in [`ALIENS_CREATED`]. The type is deliberately
/// not `Clone` so every live alien has been counted exactly once.
#[derive(Debug, PartialEq)]
pub struct Alien {
    position: Position,
    health: i32,
}

impl Alien {
    /// Spawns an alien at `(x, y)` with [`DEFAULT_HEALTH`].
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_health(x, y, DEFAULT_HEALTH)
    }

    /// Spawns an alien at `(x, y)` with an explicit starting health.
    #[must_use]
    pub fn with_health(x: f64, y: f64, health: i32) -> Self {
        let total = ALIENS_CREATED.record();
        trace!("spawned alien #{total} at ({x}, {y}) with health {health}");
        Self {
            position: Position::new(x, y),
            health,
        }
    }
}

impl Combatant for Alien {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    fn hit(&mut self, damage: i32) {
        self.health = self.health.saturating_sub(damage);
    }
}
