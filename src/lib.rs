//! Alien entities and the shields that protect them.
//!
//! An [`Alien`] has a position and a health counter. [`Shield`]s wrap any
//! [`Combatant`], including other shields, and soften incoming hits while
//! their durability lasts. Everything except `hit` passes straight through
//! to the innermost alien.
//!
//! ```rust
//! use alien::{Alien, Combatant, Shield};
//!
//! let mut guarded = Shield::personal(Shield::combat(Alien::with_health(0.0, 0.0, 100)));
//! guarded.hit(10);
//! assert_eq!(guarded.health(), 96);
//! ```
pub mod alien;
pub mod combatant;
pub mod config;
pub mod constants;
pub mod counter;
pub mod error;
pub mod fleet;
pub mod logging;
pub mod shield;

pub use alien::Alien;
pub use combatant::{Combatant, Position};
pub use config::FleetConfig;
pub use constants::*;
pub use counter::{aliens_created, reset_aliens_created, CreationCounter, ALIENS_CREATED};
pub use error::ConfigError;
pub use fleet::{spawn_fleet, spawn_shielded_fleet, survivors};
pub use logging::init as init_logging;
pub use shield::{Shield, ShieldKind, ShieldStats};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust
    //! use alien::prelude::*;
    //! ```

    pub use crate::Alien;
    pub use crate::Combatant;
    pub use crate::Shield;
    pub use crate::ShieldStats;
}
