//! The capability set shared by bare aliens and every shield wrapped around
//! them.
//!
//! Implementors supply storage access and `hit`; everything else is derived
//! from those, so a decorator that forwards the accessors automatically
//! forwards teleporting, collision checks and liveness too.

use glam::DVec2;

use crate::constants::DEFAULT_DAMAGE;

/// World-space location of a combatant.
pub type Position = DVec2;

/// Something that occupies a position and can take damage.
pub trait Combatant {
    /// Current location.
    fn position(&self) -> Position;

    /// Overwrites the location.
    fn set_position(&mut self, position: Position);

    /// Remaining health. May be negative after heavy damage.
    fn health(&self) -> i32;

    /// Overwrites the health counter.
    fn set_health(&mut self, health: i32);

    /// Applies `damage`. Negative values heal.
    fn hit(&mut self, damage: i32);

    /// Applies [`DEFAULT_DAMAGE`].
    fn hit_once(&mut self) {
        self.hit(DEFAULT_DAMAGE);
    }

    /// Horizontal coordinate.
    fn x(&self) -> f64 {
        self.position().x
    }

    /// Vertical coordinate.
    fn y(&self) -> f64 {
        self.position().y
    }

    /// Moves along the horizontal axis only.
    fn set_x(&mut self, x: f64) {
        let position = self.position();
        self.set_position(Position::new(x, position.y));
    }

    /// Moves along the vertical axis only.
    fn set_y(&mut self, y: f64) {
        let position = self.position();
        self.set_position(Position::new(position.x, y));
    }

    /// `true` while health stays above zero.
    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Jumps straight to `(x, y)`.
    fn teleport(&mut self, x: f64, y: f64) {
        self.set_position(Position::new(x, y));
    }

    /// Exact positional overlap; no radius is involved.
    fn collides_with(&self, other: &dyn Combatant) -> bool {
        self.position() == other.position()
    }
}

impl<C: Combatant + ?Sized> Combatant for Box<C> {
    fn position(&self) -> Position {
        (**self).position()
    }

    fn set_position(&mut self, position: Position) {
        (**self).set_position(position);
    }

    fn health(&self) -> i32 {
        (**self).health()
    }

    fn set_health(&mut self, health: i32) {
        (**self).set_health(health);
    }

    fn hit(&mut self, damage: i32) {
        (**self).hit(damage);
    }
}

impl<C: Combatant + ?Sized> Combatant for &mut C {
    fn position(&self) -> Position {
        (**self).position()
    }

    fn set_position(&mut self, position: Position) {
        (**self).set_position(position);
    }

    fn health(&self) -> i32 {
        (**self).health()
    }

    fn set_health(&mut self, health: i32) {
        (**self).set_health(health);
    }

    fn hit(&mut self, damage: i32) {
        (**self).hit(damage);
    }
}
