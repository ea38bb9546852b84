//! Thread-safe handle to a vending machine.

use crate::core::{CoinValue, Denomination, Priced, Product, TransactionState};
use crate::machine::error::VendError;
use crate::machine::outcome::VendOutcome;
use crate::machine::vending::VendingMachine;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle that runs every machine operation under one lock.
///
/// Each call holds the lock for its whole read-then-mutate sequence, so
/// concurrent customers never observe a half-finished vend.
pub struct SharedVendingMachine<P = Product, C = Denomination> {
    inner: Arc<Mutex<VendingMachine<P, C>>>,
}

impl<P: Priced, C: CoinValue> SharedVendingMachine<P, C> {
    pub fn new(machine: VendingMachine<P, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    /// Run `f` with exclusive access to the machine.
    ///
    /// Use this to group several operations into one atomic step.
    pub fn with_machine<R>(&self, f: impl FnOnce(&mut VendingMachine<P, C>) -> R) -> R {
        let mut machine = self.inner.lock();
        f(&mut *machine)
    }

    pub fn insert(&self, coin: C) {
        self.inner.lock().insert(coin);
    }

    pub fn select(&self, name: &str) -> Result<(), VendError> {
        self.inner.lock().select(name)
    }

    pub fn vend(&self) -> Result<VendOutcome<P, C>, VendError> {
        self.inner.lock().vend()
    }

    pub fn cancel(&self) -> Vec<C> {
        self.inner.lock().cancel()
    }

    pub fn selection(&self) -> String {
        self.inner.lock().selection().to_string()
    }

    pub fn state(&self) -> TransactionState {
        self.inner.lock().state()
    }

    pub fn products_in_stock(&self) -> Vec<String> {
        self.inner
            .lock()
            .products_in_stock()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn amount_collected(&self) -> u64 {
        self.inner.lock().amount_collected()
    }

    pub fn amount_inserted(&self) -> u64 {
        self.inner.lock().amount_inserted()
    }

    pub fn reload_coins<I>(&self, coins: I)
    where
        I: IntoIterator<Item = C>,
    {
        self.inner.lock().reload_coins(coins);
    }

    pub fn reload_products<I>(&self, products: I)
    where
        I: IntoIterator<Item = P>,
    {
        self.inner.lock().reload_products(products);
    }
}

impl<P, C> Clone for SharedVendingMachine<P, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: Priced, C: CoinValue> From<VendingMachine<P, C>> for SharedVendingMachine<P, C> {
    fn from(machine: VendingMachine<P, C>) -> Self {
        Self::new(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_one_machine() {
        let shared: SharedVendingMachine =
            VendingMachine::new([Product::new("Cola", 2)], Vec::<Denomination>::new()).into();
        let other = shared.clone();

        other.insert(Denomination::new(2).unwrap());
        other.select("Cola").unwrap();

        assert_eq!(shared.selection(), "Cola");
        assert_eq!(shared.amount_inserted(), 2);
        assert!(shared.vend().unwrap().is_vended());
        assert_eq!(other.amount_collected(), 2);
    }

    #[test]
    fn concurrent_purchases_never_oversell() {
        let products = (0..5).map(|_| Product::new("Cola", 1));
        let shared: SharedVendingMachine =
            VendingMachine::new(products, Vec::<Denomination>::new()).into();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.with_machine(|machine| {
                        if machine.select("Cola").is_err() {
                            return false;
                        }
                        machine.insert(Denomination::new(1).unwrap());
                        matches!(machine.vend(), Ok(VendOutcome::Vended(_)))
                    })
                })
            })
            .collect();

        let sold = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|vended| *vended)
            .count();

        assert_eq!(sold, 5);
        assert_eq!(shared.amount_collected(), 5);
        assert!(shared.products_in_stock().is_empty());
        assert_eq!(shared.state(), TransactionState::Idle);
    }
}
