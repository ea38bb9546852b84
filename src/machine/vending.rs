//! The vending machine: selection, payment and the vend decision.

use crate::config::{ChangePolicy, MachineConfig};
use crate::core::{
    CoinValue, Denomination, Priced, Product, State, TransactionId, TransactionLog,
    TransactionState,
};
use crate::machine::error::VendError;
use crate::machine::outcome::VendOutcome;
use crate::registry::{CoinRegistry, StockRegistry};
use std::cmp::Ordering;
use tracing::{debug, info, warn};

/// Returned by [`VendingMachine::selection`] when nothing is selected.
pub const NO_SELECTION: &str = "No product selected";

/// A single coin-operated vending machine.
///
/// The machine owns its stock and its till. A customer transaction
/// accumulates inserted coins and at most one selected product, which has
/// already been taken out of stock. `vend` either completes the
/// transaction atomically or leaves everything as it was.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::{Denomination, Product};
/// use vending_machine::machine::{VendOutcome, VendingMachine, NO_SELECTION};
///
/// let mut machine = VendingMachine::new(
///     [Product::new("Soda", 98)],
///     Denomination::parse_all([2]).unwrap(),
/// );
///
/// machine.insert(Denomination::new(100).unwrap());
/// machine.select("Soda").unwrap();
///
/// let (soda, change) = machine.vend().unwrap().into_parts().unwrap();
/// assert_eq!(soda.name(), "Soda");
/// assert_eq!(change.map(|c| c.value()), Some(2));
/// assert_eq!(machine.amount_collected(), 100);
/// assert_eq!(machine.selection(), NO_SELECTION);
/// ```
#[derive(Debug, Clone)]
pub struct VendingMachine<P = Product, C = Denomination> {
    stock: StockRegistry<P>,
    till: CoinRegistry<C>,
    inserted: CoinRegistry<C>,
    selection: Option<P>,
    transaction: TransactionId,
    change_policy: ChangePolicy,
    log: TransactionLog<TransactionState>,
}

impl<P: Priced, C: CoinValue> VendingMachine<P, C> {
    /// Create a machine with initial stock and till, using default policy.
    pub fn new<I, J>(products: I, coins: J) -> Self
    where
        I: IntoIterator<Item = P>,
        J: IntoIterator<Item = C>,
    {
        Self::with_config(products, coins, &MachineConfig::default())
    }

    /// Create a machine with initial stock and till under `config`.
    ///
    /// `config` is expected to be valid; use
    /// [`VendingMachineBuilder`](crate::builder::VendingMachineBuilder) to
    /// have it checked.
    pub fn with_config<I, J>(products: I, coins: J, config: &MachineConfig) -> Self
    where
        I: IntoIterator<Item = P>,
        J: IntoIterator<Item = C>,
    {
        Self {
            stock: products.into_iter().collect(),
            till: coins.into_iter().collect(),
            inserted: CoinRegistry::new(),
            selection: None,
            transaction: TransactionId::new(),
            change_policy: config.change_policy,
            log: TransactionLog::with_limit(config.history_limit),
        }
    }

    /// Current transaction state (pure).
    pub fn state(&self) -> TransactionState {
        if self.selection.is_some() {
            TransactionState::Selected
        } else {
            TransactionState::Idle
        }
    }

    pub fn transaction_id(&self) -> TransactionId {
        self.transaction
    }

    pub fn change_policy(&self) -> ChangePolicy {
        self.change_policy
    }

    /// Distinct names of stocked products.
    pub fn products_in_stock(&self) -> Vec<&str> {
        self.stock.list_names()
    }

    /// Total value held in the till.
    pub fn amount_collected(&self) -> u64 {
        self.till.amount()
    }

    pub fn reload_coins<I>(&mut self, coins: I)
    where
        I: IntoIterator<Item = C>,
    {
        let before = self.till.len();
        self.till.load(coins);
        info!(
            added = self.till.len() - before,
            till = self.till.amount(),
            "till reloaded"
        );
    }

    pub fn reload_products<I>(&mut self, products: I)
    where
        I: IntoIterator<Item = P>,
    {
        let before = self.stock.len();
        self.stock.load(products);
        info!(
            added = self.stock.len() - before,
            stocked = self.stock.len(),
            "stock reloaded"
        );
    }

    /// Add a coin to the customer's payment. Valid in any state.
    pub fn insert(&mut self, coin: C) {
        let value = coin.value();
        self.inserted.load([coin]);
        debug!(
            transaction = %self.transaction,
            value,
            inserted = self.inserted.amount(),
            "coin inserted"
        );
    }

    /// Total value of the coins inserted in this transaction.
    pub fn amount_inserted(&self) -> u64 {
        self.inserted.amount()
    }

    /// Take one unit of `name` out of stock as the current selection.
    ///
    /// A product selected earlier in the same transaction goes back to
    /// stock. On failure the previous selection and the inserted coins are
    /// kept.
    pub fn select(&mut self, name: &str) -> Result<(), VendError> {
        if self.selection.as_ref().is_some_and(|p| p.name() == name) {
            return Ok(());
        }

        let product = self.stock.remove_by_name(name).inspect_err(|_| {
            warn!(transaction = %self.transaction, product = name, "selection out of stock");
        })?;

        let from = self.state();
        if let Some(previous) = self.selection.replace(product) {
            debug!(product = previous.name(), "previous selection returned to stock");
            self.stock.load([previous]);
        }
        self.log.record(self.transaction, from, TransactionState::Selected);
        debug!(
            transaction = %self.transaction,
            product = name,
            from = from.name(),
            "product selected"
        );
        Ok(())
    }

    /// Name of the selected product, or [`NO_SELECTION`].
    pub fn selection(&self) -> &str {
        self.selection
            .as_ref()
            .map_or(NO_SELECTION, |product| product.name())
    }

    pub fn selected_product(&self) -> Option<&P> {
        self.selection.as_ref()
    }

    /// Try to complete the transaction.
    ///
    /// Compares the inserted amount with the selected product's price:
    /// - nothing selected or too little inserted: an advisory outcome, no
    ///   state change
    /// - exact payment: coins move to the till and the product is released
    /// - overpayment: one till coin worth exactly the difference is released
    ///   as change alongside the product
    ///
    /// When no such coin exists the [`ChangePolicy`] decides. Under
    /// `RejectVend` this fails with [`VendError::NoExactChange`] and
    /// nothing changes.
    pub fn vend(&mut self) -> Result<VendOutcome<P, C>, VendError> {
        let Some(product) = self.selection.take() else {
            debug!(transaction = %self.transaction, "vend without selection");
            return Ok(VendOutcome::SelectProduct);
        };

        let price = product.price();
        let inserted = self.amount_inserted();

        match inserted.cmp(&u64::from(price)) {
            Ordering::Less => {
                // inserted < price, so it fits in u32
                let shortfall = price - inserted as u32;
                debug!(
                    transaction = %self.transaction,
                    product = product.name(),
                    price,
                    inserted,
                    shortfall,
                    "insufficient payment"
                );
                self.selection = Some(product);
                Ok(VendOutcome::InsertMoreCoins { shortfall })
            }
            Ordering::Equal => {
                let product = self.settle(product);
                info!(product = product.name(), price, "vended");
                Ok(VendOutcome::Vended(product))
            }
            Ordering::Greater => {
                let owed = inserted - u64::from(price);
                let change = u32::try_from(owed)
                    .ok()
                    .and_then(|value| self.till.remove_by_value(value).ok());
                match change {
                    Some(change) => {
                        let product = self.settle(product);
                        info!(product = product.name(), price, change = owed, "vended with change");
                        Ok(VendOutcome::VendedWithChange { product, change })
                    }
                    None => match self.change_policy {
                        ChangePolicy::RejectVend => {
                            warn!(
                                transaction = %self.transaction,
                                product = product.name(),
                                change = owed,
                                "no exact change, vend refused"
                            );
                            self.selection = Some(product);
                            Err(VendError::NoExactChange { change: owed })
                        }
                        ChangePolicy::KeepOverpayment => {
                            let product = self.settle(product);
                            warn!(product = product.name(), owed, "vended without change");
                            Ok(VendOutcome::VendedWithoutChange { product, owed })
                        }
                    },
                }
            }
        }
    }

    /// Abandon the transaction.
    ///
    /// The selected product, if any, goes back to stock and the inserted
    /// coins are handed back to the caller.
    pub fn cancel(&mut self) -> Vec<C> {
        let from = self.state();
        let refund = self.inserted.take_all();

        if let Some(product) = self.selection.take() {
            self.stock.load([product]);
        }
        if from == TransactionState::Selected || !refund.is_empty() {
            info!(
                transaction = %self.transaction,
                refunded = refund.len(),
                "transaction cancelled"
            );
            self.finish(from, TransactionState::Cancelled);
        }
        refund
    }

    pub fn stock(&self) -> &StockRegistry<P> {
        &self.stock
    }

    pub fn till(&self) -> &CoinRegistry<C> {
        &self.till
    }

    /// Coins inserted in the current transaction.
    pub fn inserted(&self) -> &CoinRegistry<C> {
        &self.inserted
    }

    pub fn log(&self) -> &TransactionLog<TransactionState> {
        &self.log
    }

    /// Credit the payment to the till and release `product`.
    fn settle(&mut self, product: P) -> P {
        let paid = self.inserted.take_all();
        self.till.load(paid);
        self.finish(TransactionState::Selected, TransactionState::Vended);
        product
    }

    /// Log the ending of the current transaction and open a new one.
    fn finish(&mut self, from: TransactionState, ending: TransactionState) {
        self.log.record(self.transaction, from, ending);
        self.log.record(self.transaction, ending, TransactionState::Idle);
        self.transaction = TransactionId::new();
    }
}

impl<P: Priced, C: CoinValue> Default for VendingMachine<P, C> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
