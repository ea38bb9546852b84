//! Ordered registries owning the machine's products and coins.
//!
//! Both registries keep insertion order, remove by exact match only, and
//! hand ownership of a removed entry to the caller.

pub mod error;
mod hopper;
mod stock;

pub use error::RegistryError;
pub use hopper::CoinRegistry;
pub use stock::StockRegistry;
