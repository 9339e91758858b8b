//! Transaction admission.
//!
//! The admission controller runs a fixed predicate chain over the ledger
//! before a transaction may enter the pending pool. Rejection precedence,
//! first match wins:
//!
//! 1. `InvalidInput` — empty identifier or zero amount
//! 2. `UnknownSender` — sender not registered
//! 3. `DoubleSpend` — `(sender, amount)` already in the spent-set
//!    (spent-set guarded policy only)
//! 4. `InsufficientStake` — stake below minimum (stake-gated policy only)
//! 5. `InsufficientBalance` — balance below amount
//!
//! On acceptance the sender is debited immediately and, under the
//! spent-set policy, the spend key is recorded. Debits are never rolled
//! back when a pooled transaction is later discarded.

use crate::domain::accounts::Ledger;
use crate::domain::errors::{AdmissionError, AdmissionResult};
use serde::{Deserialize, Serialize};
use shared_types::{SpendKey, Transaction};
use std::collections::HashSet;

/// The admission rule set in force for a run. Variants are mutually
/// exclusive per configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionPolicy {
    /// Balance sufficiency only. Reproduces the unguarded baseline.
    Open,
    /// Rejects a repeat `(sender, amount)` pair at submission time.
    SpentSetGuarded,
    /// Admits duplicates into the pool; the conflict scan before sealing
    /// aborts the block instead.
    BlockLevelGuarded,
    /// Requires a minimum committed stake to transact at all.
    StakeGated {
        /// Stake required to participate.
        minimum_stake: u64,
    },
}

impl AdmissionPolicy {
    /// Reference participation minimum for the stake-gated policy.
    pub const DEFAULT_MINIMUM_STAKE: u64 = 20;

    /// The stake-gated policy with the reference minimum.
    pub fn stake_gated() -> Self {
        Self::StakeGated {
            minimum_stake: Self::DEFAULT_MINIMUM_STAKE,
        }
    }
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self::Open
    }
}

/// Evaluates the configured policy and mutates the ledger on acceptance.
#[derive(Clone, Debug)]
pub struct AdmissionController {
    policy: AdmissionPolicy,
    /// Process-wide spent-set; consulted by the spent-set policy only.
    spent: HashSet<SpendKey>,
}

impl AdmissionController {
    /// Creates a controller for the given policy with an empty spent-set.
    pub fn new(policy: AdmissionPolicy) -> Self {
        Self {
            policy,
            spent: HashSet::new(),
        }
    }

    /// The policy in force.
    pub fn policy(&self) -> &AdmissionPolicy {
        &self.policy
    }

    /// Number of spend keys recorded so far.
    pub fn spent_len(&self) -> usize {
        self.spent.len()
    }

    /// Admits or rejects a transaction against the current ledger state.
    ///
    /// On acceptance the sender is debited by the amount; the caller is
    /// responsible for appending the transaction to the pending pool.
    pub fn admit(&mut self, ledger: &mut Ledger, tx: &Transaction) -> AdmissionResult<()> {
        validate_shape(tx)?;

        let key = tx.spend_key();
        let sender = ledger
            .get(&tx.sender)
            .ok_or_else(|| AdmissionError::UnknownSender(tx.sender.clone()))?;

        if self.policy == AdmissionPolicy::SpentSetGuarded && self.spent.contains(&key) {
            return Err(AdmissionError::DoubleSpend(key));
        }

        if let AdmissionPolicy::StakeGated { minimum_stake } = self.policy {
            if sender.stake < minimum_stake {
                return Err(AdmissionError::InsufficientStake {
                    stake: sender.stake,
                    minimum: minimum_stake,
                });
            }
        }

        if sender.balance < tx.amount {
            return Err(AdmissionError::InsufficientBalance {
                balance: sender.balance,
                amount: tx.amount,
            });
        }

        ledger.debit(&tx.sender, tx.amount)?;
        if self.policy == AdmissionPolicy::SpentSetGuarded {
            self.spent.insert(key);
        }
        tracing::debug!(
            sender = %tx.sender,
            receiver = %tx.receiver,
            amount = tx.amount,
            "transaction admitted"
        );
        Ok(())
    }
}

/// Shape hardening applied ahead of every policy check.
fn validate_shape(tx: &Transaction) -> AdmissionResult<()> {
    if tx.sender.is_empty() {
        return Err(AdmissionError::InvalidInput {
            reason: "empty sender identifier".to_owned(),
        });
    }
    if tx.receiver.is_empty() {
        return Err(AdmissionError::InvalidInput {
            reason: "empty receiver identifier".to_owned(),
        });
    }
    if tx.amount == 0 {
        return Err(AdmissionError::InvalidInput {
            reason: "amount must be positive".to_owned(),
        });
    }
    Ok(())
}
