//! Spawning groups of aliens.

use log::debug;

use crate::alien::Alien;
use crate::combatant::Combatant;
use crate::config::FleetConfig;
use crate::shield::Shield;

/// One default-health alien per position, in input order.
///
/// ```rust
/// use alien::{spawn_fleet, Combatant};
///
/// let fleet = spawn_fleet(&[(0.0, 0.0), (5.5, 10.2)]);
/// assert_eq!(fleet.len(), 2);
/// assert_eq!(fleet[1].x(), 5.5);
/// assert!(spawn_fleet(&[]).is_empty());
/// ```
#[must_use]
pub fn spawn_fleet(positions: &[(f64, f64)]) -> Vec<Alien> {
    positions.iter().map(|&(x, y)| Alien::new(x, y)).collect()
}

/// Spawns the fleet a [`FleetConfig`] describes, wrapping every alien in the
/// configured shield layers (first listed ends up innermost).
#[must_use]
pub fn spawn_shielded_fleet(config: &FleetConfig) -> Vec<Box<dyn Combatant>> {
    debug!(
        "spawning {} aliens with {} shield layers each",
        config.positions.len(),
        config.shields.len()
    );
    config
        .positions
        .iter()
        .map(|&(x, y)| {
            let base: Box<dyn Combatant> = Box::new(Alien::with_health(x, y, config.health));
            config.shields.iter().fold(base, |inner, &stats| {
                Box::new(Shield::new(inner, stats)) as Box<dyn Combatant>
            })
        })
        .collect()
}

/// Number of fleet members still alive.
#[must_use]
pub fn survivors<C: Combatant>(fleet: &[C]) -> usize {
    fleet.iter().filter(|member| member.is_alive()).count()
}
