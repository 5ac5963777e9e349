//! Damage-reducing shields layered around a [`Combatant`].
//!
//! A [`Shield`] owns the value it protects and forwards every accessor to it,
//! so position and health live only in the innermost alien. The one
//! operation a shield changes is [`Combatant::hit`]: while durability remains
//! it subtracts its protection (never below zero) and spends one durability
//! point, then passes whatever is left inward. Shields nest, each layer
//! softening the blow independently from the outside in.

use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::combatant::{Combatant, Position};
use crate::constants::{
    COMBAT_SHIELD_DURABILITY, COMBAT_SHIELD_PROTECTION, PERSONAL_SHIELD_DURABILITY,
    PERSONAL_SHIELD_PROTECTION,
};

/// Starting durability and per-hit protection of a shield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShieldStats {
    /// Hits the shield can soften before breaking.
    pub durability: i32,
    /// Flat reduction applied to each softened hit.
    pub protection: i32,
}

impl ShieldStats {
    /// Personal deflector.
    pub const PERSONAL: Self = Self {
        durability: PERSONAL_SHIELD_DURABILITY,
        protection: PERSONAL_SHIELD_PROTECTION,
    };

    /// Combat deflector.
    pub const COMBAT: Self = Self {
        durability: COMBAT_SHIELD_DURABILITY,
        protection: COMBAT_SHIELD_PROTECTION,
    };

    /// Damage that survives this shield's protection, floored at zero so an
    /// over-strong shield never heals.
    #[must_use]
    pub const fn reduce(self, damage: i32) -> i32 {
        let reduced = damage.saturating_sub(self.protection);
        if reduced > 0 {
            reduced
        } else {
            0
        }
    }
}

/// Which family a shield belongs to; used for log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShieldKind {
    /// Built from [`ShieldStats::PERSONAL`].
    Personal,
    /// Built from [`ShieldStats::COMBAT`].
    Combat,
    /// Any other durability/protection pairing.
    Custom,
}

impl ShieldKind {
    const fn classify(stats: ShieldStats) -> Self {
        if stats.durability == ShieldStats::PERSONAL.durability
            && stats.protection == ShieldStats::PERSONAL.protection
        {
            Self::Personal
        } else if stats.durability == ShieldStats::COMBAT.durability
            && stats.protection == ShieldStats::COMBAT.protection
        {
            Self::Combat
        } else {
            Self::Custom
        }
    }
}

impl fmt::Display for ShieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Personal => "personal",
            Self::Combat => "combat",
            Self::Custom => "custom",
        };
        f.write_str(label)
    }
}

/// A shield wrapped around `C`.
#[derive(Debug)]
pub struct Shield<C> {
    inner: C,
    kind: ShieldKind,
    durability: i32,
    protection: i32,
}

impl<C: Combatant> Shield<C> {
    /// Wraps `inner` in a shield described by `stats`.
    #[must_use]
    pub const fn new(inner: C, stats: ShieldStats) -> Self {
        Self {
            inner,
            kind: ShieldKind::classify(stats),
            durability: stats.durability,
            protection: stats.protection,
        }
    }

    /// Wraps `inner` in a personal shield.
    #[must_use]
    pub const fn personal(inner: C) -> Self {
        Self::new(inner, ShieldStats::PERSONAL)
    }

    /// Wraps `inner` in a combat shield.
    #[must_use]
    pub const fn combat(inner: C) -> Self {
        Self::new(inner, ShieldStats::COMBAT)
    }

    /// Wraps `inner` in an already-depleted shield that forwards everything
    /// untouched.
    #[must_use]
    pub const fn passthrough(inner: C) -> Self {
        Self::new(
            inner,
            ShieldStats {
                durability: 0,
                protection: 0,
            },
        )
    }

    /// Remaining durability.
    #[must_use]
    pub const fn durability(&self) -> i32 {
        self.durability
    }

    /// Per-hit damage reduction.
    #[must_use]
    pub const fn protection(&self) -> i32 {
        self.protection
    }

    /// The shield's family.
    #[must_use]
    pub const fn kind(&self) -> ShieldKind {
        self.kind
    }

    /// Whether the next hit will be softened.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.durability > 0
    }

    /// The protected value.
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Mutable access to the protected value.
    pub const fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    /// Removes the shield, handing back the protected value.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }

    const fn stats(&self) -> ShieldStats {
        ShieldStats {
            durability: self.durability,
            protection: self.protection,
        }
    }
}

impl<C: Combatant> Combatant for Shield<C> {
    fn position(&self) -> Position {
        self.inner.position()
    }

    fn set_position(&mut self, position: Position) {
        self.inner.set_position(position);
    }

    fn health(&self) -> i32 {
        self.inner.health()
    }

    fn set_health(&mut self, health: i32) {
        self.inner.set_health(health);
    }

    fn hit(&mut self, damage: i32) {
        if !self.is_active() {
            debug!("{} shield broken, full damage {damage} passes", self.kind);
            self.inner.hit(damage);
            return;
        }
        info!(
            "{} shield active, durability remaining: {}",
            self.kind, self.durability
        );
        let effective = self.stats().reduce(damage);
        self.durability -= 1;
        self.inner.hit(effective);
    }
}
