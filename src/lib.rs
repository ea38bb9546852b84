//! A coin-operated vending machine modelled as a small state machine.
//!
//! The machine tracks stocked products, the coins held in its till, and the
//! payment a customer is building up. It decides whether a selection can be
//! vended and which single coin, if any, is returned as change.
//!
//! # Core Concepts
//!
//! - **Denominations and products**: validated value types in [`core`]
//! - **Registries**: ordered, exact-match stock and coin stores in [`registry`]
//! - **Machine**: the select, insert, vend and cancel lifecycle in [`machine`]
//! - **Policy**: what happens without exact change, in [`config`]
//!
//! # Example
//!
//! ```rust
//! use vending_machine::core::{Denomination, Product};
//! use vending_machine::machine::{VendOutcome, VendingMachine};
//!
//! let mut machine = VendingMachine::new(
//!     [Product::new("Cola", 2)],
//!     Vec::<Denomination>::new(),
//! );
//!
//! machine.select("Cola").unwrap();
//! let outcome = machine.vend().unwrap();
//! assert_eq!(outcome, VendOutcome::InsertMoreCoins { shortfall: 2 });
//! assert_eq!(outcome.to_string(), "please insert more coins");
//!
//! machine.insert(Denomination::new(2).unwrap());
//! let outcome = machine.vend().unwrap();
//! assert_eq!(outcome.product().map(|p| p.name()), Some("Cola"));
//! assert_eq!(machine.amount_collected(), 2);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;
pub mod registry;

// Re-export commonly used types
pub use crate::builder::{BuildError, VendingMachineBuilder};
pub use crate::config::{ChangePolicy, MachineConfig};
pub use crate::core::{CoinValue, Denomination, Priced, Product, State, TransactionState};
pub use crate::machine::{
    SharedVendingMachine, VendError, VendOutcome, VendingMachine, NO_SELECTION,
};
pub use crate::registry::{CoinRegistry, RegistryError, StockRegistry};
