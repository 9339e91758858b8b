//! The account table.
//!
//! Accounts are created on first registration and never destroyed during
//! a run. Iteration order is the identifier order (`BTreeMap`), so
//! snapshots and random sampling over the account universe are
//! deterministic.

use crate::domain::errors::{AdmissionError, AdmissionResult};
use shared_types::{Account, AccountId};
use std::collections::BTreeMap;

/// Mapping of account identifier to balance and stake.
#[derive(Clone, Debug)]
pub struct Ledger {
    accounts: BTreeMap<AccountId, Account>,
    starting_balance: u64,
}

impl Ledger {
    /// Starting balance granted to every newly registered account.
    pub const DEFAULT_STARTING_BALANCE: u64 = 100;

    /// Creates an empty ledger with the given starting balance.
    pub fn new(starting_balance: u64) -> Self {
        Self {
            accounts: BTreeMap::new(),
            starting_balance,
        }
    }

    /// Creates an empty ledger with the reference starting balance.
    pub fn with_defaults() -> Self {
        Self::new(Self::DEFAULT_STARTING_BALANCE)
    }

    /// Registers an account, creating it with the starting balance and
    /// zero stake if absent.
    ///
    /// Idempotent: re-registering returns the existing account without
    /// resetting its balance or stake.
    pub fn register(&mut self, id: AccountId) -> &Account {
        let starting_balance = self.starting_balance;
        self.accounts.entry(id.clone()).or_insert_with(|| {
            tracing::debug!(account = %id, balance = starting_balance, "account registered");
            Account::new(id, starting_balance)
        })
    }

    /// Checks if an account is registered.
    pub fn contains(&self, id: &AccountId) -> bool {
        self.accounts.contains_key(id)
    }

    /// Gets an account by identifier.
    pub fn get(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Returns the number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no account is registered.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All registered identifiers, in identifier order.
    pub fn ids(&self) -> Vec<AccountId> {
        self.accounts.keys().cloned().collect()
    }

    /// Debits an account by `amount`.
    ///
    /// The debit is checked: a balance can never go negative.
    pub fn debit(&mut self, id: &AccountId, amount: u64) -> AdmissionResult<()> {
        let account = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| AdmissionError::UnknownSender(id.clone()))?;
        if account.balance < amount {
            return Err(AdmissionError::InsufficientBalance {
                balance: account.balance,
                amount,
            });
        }
        account.balance -= amount;
        Ok(())
    }

    /// Pins an account's balance to an exact value (scenario hook).
    pub fn set_balance(&mut self, id: &AccountId, balance: u64) -> AdmissionResult<()> {
        let account = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| AdmissionError::UnknownSender(id.clone()))?;
        account.balance = balance;
        Ok(())
    }

    /// Pins an account's stake to an exact value (scenario hook).
    pub fn set_stake(&mut self, id: &AccountId, stake: u64) -> AdmissionResult<()> {
        let account = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| AdmissionError::UnknownSender(id.clone()))?;
        account.stake = stake;
        Ok(())
    }

    /// A point-in-time copy of every account, in identifier order.
    pub fn snapshot(&self) -> Vec<Account> {
        self.accounts.values().cloned().collect()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_defaults()
    }
}
