//! Configuration error types.

use thiserror::Error;

/// Errors that can occur when loading or validating a [`MachineConfig`].
///
/// [`MachineConfig`]: crate::config::MachineConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed
    #[error("Failed to parse machine config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The transaction log must retain at least one entry
    #[error("History limit must be at least 1, got {0}")]
    InvalidHistoryLimit(usize),
}
