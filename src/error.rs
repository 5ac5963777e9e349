//! Error types for loading fleet configuration.
//!
//! Combat itself is total and never fails; only reading and validating
//! external input can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading or validating a [`FleetConfig`](crate::FleetConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read fleet config {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The configuration text was not valid JSON for a fleet.
    #[error("malformed fleet config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A shield layer carried a negative durability or protection.
    #[error(
        "shield layer {index} has negative stats \
         (durability {durability}, protection {protection})"
    )]
    InvalidShield {
        /// Position of the offending layer, innermost first.
        index: usize,
        /// Configured durability.
        durability: i32,
        /// Configured protection.
        protection: i32,
    },
}
