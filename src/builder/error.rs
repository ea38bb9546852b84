//! Build errors for the vending machine builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a vending machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid machine configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Invalid coin values supplied to the builder: {values:?}")]
    InvalidCoins { values: Vec<u32> },
}
