//! Results of a vend attempt.

use std::fmt;

/// Outcome of [`VendingMachine::vend`](crate::machine::VendingMachine::vend).
///
/// Advisory outcomes ask the customer to do something before the vend can
/// complete. They leave the machine unchanged and are never confused with
/// a vended product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendOutcome<P, C> {
    /// No product is selected
    SelectProduct,

    /// The inserted amount is below the price
    InsertMoreCoins { shortfall: u32 },

    /// Exact payment: the product is released
    Vended(P),

    /// Overpayment: the product is released with one change coin
    VendedWithChange { product: P, change: C },

    /// Overpayment with no exact change available under
    /// [`ChangePolicy::KeepOverpayment`](crate::config::ChangePolicy::KeepOverpayment)
    VendedWithoutChange { product: P, owed: u64 },
}

impl<P, C> VendOutcome<P, C> {
    /// Whether a product was released.
    pub fn is_vended(&self) -> bool {
        !self.is_advisory()
    }

    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::SelectProduct | Self::InsertMoreCoins { .. })
    }

    /// The message shown for advisory outcomes.
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            Self::SelectProduct => Some("please select a product"),
            Self::InsertMoreCoins { .. } => Some("please insert more coins"),
            _ => None,
        }
    }

    pub fn product(&self) -> Option<&P> {
        match self {
            Self::Vended(product)
            | Self::VendedWithChange { product, .. }
            | Self::VendedWithoutChange { product, .. } => Some(product),
            _ => None,
        }
    }

    /// Split a vend into the product and any change coin, product first.
    pub fn into_parts(self) -> Option<(P, Option<C>)> {
        match self {
            Self::Vended(product) | Self::VendedWithoutChange { product, .. } => {
                Some((product, None))
            }
            Self::VendedWithChange { product, change } => Some((product, Some(change))),
            Self::SelectProduct | Self::InsertMoreCoins { .. } => None,
        }
    }
}

impl<P, C> fmt::Display for VendOutcome<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectProduct | Self::InsertMoreCoins { .. } => {
                f.write_str(self.advisory().unwrap_or_default())
            }
            Self::Vended(_) => f.write_str("vended"),
            Self::VendedWithChange { .. } => f.write_str("vended with change"),
            Self::VendedWithoutChange { owed, .. } => write!(f, "vended, {owed} not returned"),
        }
    }
}
