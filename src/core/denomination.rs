//! Coin denominations accepted by the machine.
//!
//! A [`Denomination`] can only be constructed from one of the values in
//! [`DENOMINATIONS`]. Anything that exposes a coin value can stand in for
//! it through the [`CoinValue`] capability.

use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Every coin value the machine accepts, in pence.
pub const DENOMINATIONS: [u32; 8] = [1, 2, 5, 10, 20, 50, 100, 200];

/// Capability shared by everything that can sit in a coin registry.
pub trait CoinValue {
    /// Face value in pence.
    fn value(&self) -> u32;
}

/// Raised when a coin value is not in [`DENOMINATIONS`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Invalid denomination: {value}")]
pub struct InvalidDenomination {
    pub value: u32,
}

/// Errors from validating several coin values at once.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DenominationError {
    #[error("Invalid denominations in batch: {values:?}")]
    InvalidBatch { values: Vec<u32> },
}

/// A single validated coin.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::Denomination;
///
/// let coin = Denomination::new(20).unwrap();
/// assert_eq!(coin.value(), 20);
/// assert!(Denomination::new(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Denomination {
    value: u32,
}

impl Denomination {
    /// Create a coin, failing for values outside the accepted set.
    pub fn new(value: u32) -> Result<Self, InvalidDenomination> {
        if Self::is_valid(value) {
            Ok(Self { value })
        } else {
            Err(InvalidDenomination { value })
        }
    }

    /// Whether `value` is an accepted denomination (pure).
    pub fn is_valid(value: u32) -> bool {
        DENOMINATIONS.contains(&value)
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Validate a batch of raw values, reporting every invalid one.
    ///
    /// Unlike calling [`Denomination::new`] in a loop, this does not stop at
    /// the first bad value.
    ///
    /// ```rust
    /// use vending_machine::core::{Denomination, DenominationError};
    ///
    /// let coins = Denomination::parse_all([1, 2, 5]).unwrap();
    /// assert_eq!(coins.len(), 3);
    ///
    /// let err = Denomination::parse_all([3, 5, 7]).unwrap_err();
    /// assert_eq!(err, DenominationError::InvalidBatch { values: vec![3, 7] });
    /// ```
    pub fn parse_all<I>(values: I) -> Result<Vec<Self>, DenominationError>
    where
        I: IntoIterator<Item = u32>,
    {
        let checks: Vec<Validation<Denomination, NonEmptyVec<InvalidDenomination>>> = values
            .into_iter()
            .map(|value| match Self::new(value) {
                Ok(coin) => Validation::success(coin),
                Err(invalid) => Validation::fail(invalid),
            })
            .collect();

        match Validation::all_vec(checks) {
            Validation::Success(coins) => Ok(coins),
            Validation::Failure(errors) => Err(DenominationError::InvalidBatch {
                values: errors.iter().map(|e| e.value).collect(),
            }),
        }
    }
}

impl CoinValue for Denomination {
    fn value(&self) -> u32 {
        self.value
    }
}

impl TryFrom<u32> for Denomination {
    type Error = InvalidDenomination;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Denomination> for u32 {
    fn from(coin: Denomination) -> Self {
        coin.value
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value >= 100 {
            write!(f, "£{}", self.value / 100)
        } else {
            write!(f, "{}p", self.value)
        }
    }
}
