//! Registry error types.

use thiserror::Error;

/// Errors raised when a registry cannot hand out the requested entry.
///
/// A failed removal never mutates the registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No stocked product carries this name
    #[error("{name} not in stock")]
    OutOfStock { name: String },

    /// No single held coin has exactly this value
    #[error("No coin of value {value} held")]
    NoSuchCoin { value: u32 },
}
