//! JSON fleet descriptions.
//!
//! ```json
//! {
//!   "positions": [[0.0, 0.0], [4.0, 7.0]],
//!   "health": 10,
//!   "shields": [{ "durability": 20, "protection": 5 }]
//! }
//! ```
//!
//! `health` falls back to [`DEFAULT_HEALTH`] and `shields` to none. Shield
//! layers are listed innermost first.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HEALTH;
use crate::error::ConfigError;
use crate::shield::ShieldStats;

const fn default_health() -> i32 {
    DEFAULT_HEALTH
}

/// Everything needed to spawn a shielded fleet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetConfig {
    /// Spawn points, one alien each.
    pub positions: Vec<(f64, f64)>,
    /// Starting health of every alien.
    #[serde(default = "default_health")]
    pub health: i32,
    /// Shield layers applied to every alien, innermost first.
    #[serde(default)]
    pub shields: Vec<ShieldStats>,
}

impl Default for FleetConfig {
    /// The two-alien demo fleet.
    fn default() -> Self {
        Self {
            positions: vec![(4.0, 7.0), (-1.0, 0.0)],
            health: DEFAULT_HEALTH,
            shields: Vec::new(),
        }
    }
}

impl FleetConfig {
    /// Parses and validates a fleet from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidShield`] for negative shield stats.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a fleet file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, plus any
    /// error from [`FleetConfig::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading fleet config from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Rejects shield layers with negative durability or protection.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidShield`] for the first offending layer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .shields
            .iter()
            .enumerate()
            .find(|(_, stats)| stats.durability < 0 || stats.protection < 0)
        {
            Some((index, stats)) => Err(ConfigError::InvalidShield {
                index,
                durability: stats.durability,
                protection: stats.protection,
            }),
            None => Ok(()),
        }
    }
}
