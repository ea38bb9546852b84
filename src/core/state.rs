//! Transaction states of the vending machine.
//!
//! A transaction starts `Idle`, becomes `Selected` once a product has been
//! taken from stock, and ends either `Vended` or `Cancelled`. The machine
//! returns to `Idle` immediately after either ending.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small immutable values that describe
/// where a transaction currently is.
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Position of the current customer transaction.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::{State, TransactionState};
///
/// assert_eq!(TransactionState::Idle.name(), "Idle");
/// assert!(TransactionState::Vended.is_final());
/// assert!(!TransactionState::Selected.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TransactionState {
    /// No product selected. Coins may already have been inserted.
    Idle,
    /// A product has been removed from stock and awaits payment.
    Selected,
    /// The product was released and the payment credited to the till.
    Vended,
    /// The customer abandoned the transaction and was refunded.
    Cancelled,
}

impl State for TransactionState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Selected => "Selected",
            Self::Vended => "Vended",
            Self::Cancelled => "Cancelled",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Vended | Self::Cancelled)
    }
}
