//! Vending error types.

use crate::registry::RegistryError;
use thiserror::Error;

/// Failures of machine operations.
///
/// Every failure leaves the machine exactly as it was before the call.
/// Expected advisory outcomes, such as needing more coins, are not errors;
/// see [`VendOutcome`](crate::machine::VendOutcome).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VendError {
    /// The selected product has no stocked unit
    #[error("{name} not in stock")]
    OutOfStock { name: String },

    /// The till holds no single coin worth the change owed
    #[error("Cannot return exact change of {change}")]
    NoExactChange { change: u64 },
}

impl From<RegistryError> for VendError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::OutOfStock { name } => VendError::OutOfStock { name },
            RegistryError::NoSuchCoin { value } => VendError::NoExactChange {
                change: u64::from(value),
            },
        }
    }
}
