//! Machine configuration.
//!
//! Configuration covers policy only: how the machine behaves when it cannot
//! return exact change, and how much transaction history it retains.
//! Inventory is loaded through the machine's reload operations instead.

pub mod error;

pub use error::ConfigError;

use crate::core::TransactionLog;
use crate::core::TransactionState;
use serde::{Deserialize, Serialize};

/// What `vend` does when the till holds no single coin worth the change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangePolicy {
    /// Refuse the vend and leave every registry untouched.
    #[default]
    RejectVend,

    /// Vend anyway and credit the whole payment to the till.
    KeepOverpayment,
}

/// Policy settings for a vending machine.
///
/// # Example
///
/// ```rust
/// use vending_machine::config::{ChangePolicy, MachineConfig};
///
/// let config = MachineConfig::from_json(r#"{ "change_policy": "keep_overpayment" }"#).unwrap();
/// assert_eq!(config.change_policy, ChangePolicy::KeepOverpayment);
/// assert_eq!(config.history_limit, MachineConfig::default().history_limit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Behaviour when exact change is unavailable
    pub change_policy: ChangePolicy,

    /// Maximum number of transaction log entries retained
    pub history_limit: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            change_policy: ChangePolicy::default(),
            history_limit: TransactionLog::<TransactionState>::DEFAULT_LIMIT,
        }
    }
}

impl MachineConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidHistoryLimit(self.history_limit));
        }
        Ok(())
    }
}
