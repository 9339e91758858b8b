//! The pending transaction pool.
//!
//! An ordered collection of admitted-but-unsealed transactions. The pool
//! is cleared on every successful seal, and also when the block-level
//! conflict scan aborts a seal attempt.

use shared_types::{SpendKey, Transaction};
use std::collections::HashSet;

/// Admitted transactions awaiting block inclusion, in admission order.
#[derive(Clone, Debug, Default)]
pub struct TransactionPool {
    pending: Vec<Transaction>,
}

impl TransactionPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an admitted transaction.
    pub fn push(&mut self, tx: Transaction) {
        self.pending.push(tx);
    }

    /// Number of pending transactions.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The pending transactions, in admission order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.pending
    }

    /// Removes and returns every pending transaction.
    pub fn take_all(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.pending)
    }

    /// Discards every pending transaction.
    ///
    /// Balances debited at admission are NOT restored.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Scans the pool in order and returns the first repeated
    /// `(sender, amount)` pair, if any.
    ///
    /// Used by the block-level guarded policy immediately before sealing.
    pub fn first_conflict(&self) -> Option<SpendKey> {
        let mut seen = HashSet::new();
        for tx in &self.pending {
            let key = tx.spend_key();
            if !seen.insert(key.clone()) {
                tracing::warn!(spend = %key, "conflicting spend in pending pool");
                return Some(key);
            }
        }
        None
    }
}
