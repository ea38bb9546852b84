//! The vending machine and its transaction lifecycle.
//!
//! # Key Concepts
//!
//! - **Stock and till**: registries owned by the machine for its lifetime
//! - **Transaction**: inserted coins plus at most one selected product,
//!   reset after every vend or cancellation
//! - **Outcomes**: advisory results are values, failures are [`VendError`]s
//! - **Sharing**: [`SharedVendingMachine`] serialises callers behind one lock

pub mod error;
mod outcome;
mod shared;
mod vending;

pub use error::VendError;
pub use outcome::VendOutcome;
pub use shared::SharedVendingMachine;
pub use vending::{VendingMachine, NO_SELECTION};
