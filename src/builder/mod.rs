//! Builder API for ergonomic vending machine construction.
//!
//! The builder collects initial stock, till coins and policy, validates
//! them together, and only then creates the machine.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::VendingMachineBuilder;
