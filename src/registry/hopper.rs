//! Coin registry ("hopper"): an ordered pile of coins.
//!
//! The machine uses one hopper as its till and another to accumulate the
//! coins a customer inserts during a transaction.

use crate::core::{CoinValue, Denomination};
use crate::registry::error::RegistryError;
use serde::{Deserialize, Serialize};

/// Ordered collection of held coins.
///
/// The hopper only ever hands out a single coin of an exact value; it
/// never combines coins to make up an amount.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::Denomination;
/// use vending_machine::registry::CoinRegistry;
///
/// let mut till = CoinRegistry::new();
/// till.load(Denomination::parse_all([2, 5, 2]).unwrap());
/// assert_eq!(till.amount(), 9);
///
/// let coin = till.remove_by_value(2).unwrap();
/// assert_eq!(coin.value(), 2);
/// assert_eq!(till.amount(), 7);
/// assert!(till.remove_by_value(7).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRegistry<C = Denomination> {
    coins: Vec<C>,
}

impl<C: CoinValue> CoinRegistry<C> {
    pub fn new() -> Self {
        Self { coins: Vec::new() }
    }

    /// Append coins, preserving the order they are given in.
    pub fn load<I>(&mut self, coins: I)
    where
        I: IntoIterator<Item = C>,
    {
        self.coins.extend(coins);
    }

    /// Sum of all held coin values.
    ///
    /// Summed as `u64` so a full hopper of large coins cannot overflow.
    pub fn amount(&self) -> u64 {
        self.coins.iter().map(|coin| u64::from(coin.value())).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Remove the first coin worth exactly `value` and hand it to the caller.
    ///
    /// Fails with [`RegistryError::NoSuchCoin`] without touching the
    /// hopper when no single coin matches.
    pub fn remove_by_value(&mut self, value: u32) -> Result<C, RegistryError> {
        let index = self
            .coins
            .iter()
            .position(|c| c.value() == value)
            .ok_or(RegistryError::NoSuchCoin { value })?;
        Ok(self.coins.remove(index))
    }

    /// Empty the hopper, handing every coin to the caller in order.
    pub fn take_all(&mut self) -> Vec<C> {
        std::mem::take(&mut self.coins)
    }

    /// Read-only view of the current contents.
    pub fn to_list(&self) -> &[C] {
        &self.coins
    }
}

impl<C: CoinValue> Default for CoinRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CoinValue> FromIterator<C> for CoinRegistry<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            coins: iter.into_iter().collect(),
        }
    }
}
