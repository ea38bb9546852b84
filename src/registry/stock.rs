//! Stock registry: the products currently loaded in the machine.

use crate::core::{Priced, Product};
use crate::registry::error::RegistryError;
use serde::{Deserialize, Serialize};

/// Ordered collection of stocked products.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::Product;
/// use vending_machine::registry::StockRegistry;
///
/// let mut stock = StockRegistry::new();
/// stock.load([Product::new("Cola", 2), Product::new("Cola", 2), Product::new("Crisps", 5)]);
/// assert_eq!(stock.list_names(), vec!["Cola", "Crisps"]);
///
/// let cola = stock.remove_by_name("Cola").unwrap();
/// assert_eq!(cola.price(), 2);
/// assert_eq!(stock.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRegistry<P = Product> {
    products: Vec<P>,
}

impl<P: Priced> StockRegistry<P> {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Append products, preserving the order they are given in.
    pub fn load<I>(&mut self, products: I)
    where
        I: IntoIterator<Item = P>,
    {
        self.products.extend(products);
    }

    /// Distinct product names, in order of first appearance.
    pub fn list_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for product in &self.products {
            let name = product.name();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Number of stocked units carrying `name`.
    pub fn count(&self, name: &str) -> usize {
        self.products.iter().filter(|p| p.name() == name).count()
    }

    /// Remove the first product named `name` and hand it to the caller.
    ///
    /// Fails with [`RegistryError::OutOfStock`] without touching the
    /// registry when no product matches.
    pub fn remove_by_name(&mut self, name: &str) -> Result<P, RegistryError> {
        let index = self
            .products
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| RegistryError::OutOfStock {
                name: name.to_string(),
            })?;
        Ok(self.products.remove(index))
    }

    /// Read-only view of the current contents.
    pub fn to_list(&self) -> &[P] {
        &self.products
    }
}

impl<P: Priced> Default for StockRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Priced> FromIterator<P> for StockRegistry<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}
