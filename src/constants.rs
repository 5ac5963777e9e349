//! Gameplay constants shared by aliens and their shields.
//!
//! These mirror the values the balance sheet settled on; shields read their
//! defaults from here so a retune only touches one file.

/// Health every alien spawns with unless told otherwise.
pub const DEFAULT_HEALTH: i32 = 3;
/// Damage dealt by a plain hit with no explicit amount.
pub const DEFAULT_DAMAGE: i32 = 1;

/// Hits a personal shield can soften before it breaks.
pub const PERSONAL_SHIELD_DURABILITY: i32 = 5;
/// Flat damage a personal shield removes from each hit.
pub const PERSONAL_SHIELD_PROTECTION: i32 = 1;

/// Hits a combat shield can soften before it breaks.
pub const COMBAT_SHIELD_DURABILITY: i32 = 20;
/// Flat damage a combat shield removes from each hit.
pub const COMBAT_SHIELD_PROTECTION: i32 = 5;
