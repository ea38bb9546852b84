//! Stockable products.

use serde::{Deserialize, Serialize};

/// Capability shared by everything that can sit in a stock registry.
///
/// Any type with a name and a price can be stocked; the registries never
/// need more than these two accessors.
pub trait Priced {
    fn name(&self) -> &str;

    /// Price in pence.
    fn price(&self) -> u32;
}

/// A named item with a price in pence.
///
/// Names are not required to be unique: several units of the same product
/// are stocked as several `Product` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

impl Priced for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> u32 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_a_name() {
        assert_eq!(Product::new("Cola", 0).name(), "Cola");
    }

    #[test]
    fn has_a_price() {
        assert_eq!(Product::new("", 75).price(), 75);
    }

    #[test]
    fn round_trips_through_json() {
        let product = Product::new("Crisps", 60);
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"name":"Crisps","price":60}"#);
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
