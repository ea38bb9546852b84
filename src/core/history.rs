//! Audit trail of transaction state changes.
//!
//! Every move between [`State`]s is recorded with the transaction it
//! belongs to and when it happened. The log is bounded: once `limit`
//! entries are held, the oldest entry is dropped for each new one.

use super::state::{State, TransactionState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Identifies one customer transaction, from first interaction to settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(Uuid);

impl TransactionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Record of a single state change.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LogEntry<S: State> {
    /// The transaction this change belongs to
    pub transaction: TransactionId,
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the change occurred
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered history of state changes across transactions.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::{TransactionId, TransactionLog, TransactionState};
///
/// let mut log = TransactionLog::with_limit(16);
/// let id = TransactionId::new();
/// log.record(id, TransactionState::Idle, TransactionState::Selected);
/// log.record(id, TransactionState::Selected, TransactionState::Vended);
///
/// let path = log.path(id);
/// assert_eq!(
///     path,
///     vec![
///         &TransactionState::Idle,
///         &TransactionState::Selected,
///         &TransactionState::Vended,
///     ]
/// );
/// assert_eq!(log.completed_sales(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransactionLog<S: State> {
    entries: VecDeque<LogEntry<S>>,
    limit: usize,
}

impl<S: State> TransactionLog<S> {
    pub const DEFAULT_LIMIT: usize = 256;

    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    /// Create an empty log holding at most `limit` entries.
    ///
    /// A limit of zero is treated as one.
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit.min(Self::DEFAULT_LIMIT)),
            limit,
        }
    }

    /// Append a state change stamped with the current time.
    pub fn record(&mut self, transaction: TransactionId, from: S, to: S) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            transaction,
            from,
            to,
            timestamp: Utc::now(),
        });
    }

    /// All retained entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry<S>> + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry<S>> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// States traversed by one transaction, starting from the state it
    /// first left.
    pub fn path(&self, transaction: TransactionId) -> Vec<&S> {
        let mut path = Vec::new();
        for entry in self.entries.iter().filter(|e| e.transaction == transaction) {
            if path.is_empty() {
                path.push(&entry.from);
            }
            path.push(&entry.to);
        }
        path
    }

    /// Time between the first and last retained entries of a transaction.
    pub fn duration(&self, transaction: TransactionId) -> Option<Duration> {
        let mut matching = self.entries.iter().filter(|e| e.transaction == transaction);
        let first = matching.next()?;
        let last = matching.last().unwrap_or(first);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of retained transitions into a final state, whatever the
    /// ending.
    pub fn completed(&self) -> usize {
        self.entries.iter().filter(|e| e.to.is_final()).count()
    }
}

impl TransactionLog<TransactionState> {
    /// Number of retained transactions that ended in a sale.
    ///
    /// Cancelled transactions are not counted.
    pub fn completed_sales(&self) -> usize {
        self.ended_in(TransactionState::Vended)
    }

    /// Number of retained transactions that ended in a cancellation.
    pub fn cancellations(&self) -> usize {
        self.ended_in(TransactionState::Cancelled)
    }

    fn ended_in(&self, state: TransactionState) -> usize {
        self.entries.iter().filter(|e| e.to == state).count()
    }
}

impl<S: State> Default for TransactionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}
