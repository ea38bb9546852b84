//! Core value types of the vending machine.
//!
//! This module contains the pure building blocks the registries and the
//! machine are made of:
//! - Coin denominations and the `CoinValue` capability
//! - Products and the `Priced` capability
//! - Transaction states via the `State` trait
//! - The bounded transaction log
//!
//! Nothing in this module mutates shared state or performs I/O.

mod denomination;
mod history;
mod product;
mod state;

pub use denomination::{
    CoinValue, Denomination, DenominationError, InvalidDenomination, DENOMINATIONS,
};
pub use history::{LogEntry, TransactionId, TransactionLog};
pub use product::{Priced, Product};
pub use state::{State, TransactionState};
