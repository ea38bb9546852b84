//! Builder for constructing vending machines.

use crate::builder::error::BuildError;
use crate::config::{ChangePolicy, MachineConfig};
use crate::core::{CoinValue, Denomination, DenominationError, Priced, Product};
use crate::machine::VendingMachine;

/// Builder for constructing vending machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use vending_machine::builder::VendingMachineBuilder;
/// use vending_machine::config::ChangePolicy;
/// use vending_machine::core::{Denomination, Product};
///
/// let machine = VendingMachineBuilder::<Product, Denomination>::new()
///     .products([Product::new("Cola", 2), Product::new("Crisps", 60)])
///     .coin_values([1, 2, 5, 10])
///     .change_policy(ChangePolicy::KeepOverpayment)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.amount_collected(), 18);
/// assert_eq!(machine.products_in_stock(), vec!["Cola", "Crisps"]);
/// ```
pub struct VendingMachineBuilder<P = Product, C = Denomination> {
    products: Vec<P>,
    coins: Vec<C>,
    invalid_coins: Vec<u32>,
    config: MachineConfig,
}

impl<P: Priced, C: CoinValue> VendingMachineBuilder<P, C> {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            coins: Vec::new(),
            invalid_coins: Vec::new(),
            config: MachineConfig::default(),
        }
    }

    /// Add products to the initial stock.
    pub fn products<I>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = P>,
    {
        self.products.extend(products);
        self
    }

    /// Add coins to the initial till.
    pub fn coins<I>(mut self, coins: I) -> Self
    where
        I: IntoIterator<Item = C>,
    {
        self.coins.extend(coins);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn change_policy(mut self, policy: ChangePolicy) -> Self {
        self.config.change_policy = policy;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Build the machine.
    /// Returns an error if the configuration or any coin value is invalid.
    pub fn build(self) -> Result<VendingMachine<P, C>, BuildError> {
        self.config.validate()?;

        if !self.invalid_coins.is_empty() {
            return Err(BuildError::InvalidCoins {
                values: self.invalid_coins,
            });
        }

        Ok(VendingMachine::with_config(self.products, self.coins, &self.config))
    }
}

impl<P: Priced> VendingMachineBuilder<P, Denomination> {
    /// Add coins to the initial till from raw values.
    ///
    /// Invalid values are collected and reported together by `build`.
    pub fn coin_values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        match Denomination::parse_all(values) {
            Ok(coins) => self.coins.extend(coins),
            Err(DenominationError::InvalidBatch { values }) => self.invalid_coins.extend(values),
        }
        self
    }
}

impl<P: Priced, C: CoinValue> Default for VendingMachineBuilder<P, C> {
    fn default() -> Self {
        Self::new()
    }
}
