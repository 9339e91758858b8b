//! Attack scenario drivers.
//!
//! These procedures drive the engine through adversarial sequences. They
//! are demonstration drivers, not consensus logic — but their outcomes
//! are part of the engine's contract and the exploit suite asserts them
//! per admission policy.

use crate::service::LedgerNode;
use cc_consensus::SealResult;
use cc_ledger::{AdmissionError, AdmissionResult};
use rand::Rng;
use shared_types::{AccountId, Block};

/// Outcome of a double-spend race.
#[derive(Clone, Debug)]
pub struct DoubleSpendReport {
    /// The attacking account.
    pub attacker: AccountId,
    /// Admission outcome of the first conflicting transaction.
    pub first: AdmissionResult<()>,
    /// Admission outcome of the second conflicting transaction.
    pub second: AdmissionResult<()>,
    /// Outcome of the sealing attempt that followed.
    pub seal: SealResult<Block>,
    /// The attacker's balance after the race. Debits taken at admission
    /// stand even when the seal was aborted.
    pub attacker_balance: u64,
}

/// Outcome of a Sybil identity flood.
#[derive(Clone, Debug)]
pub struct SybilReport {
    /// The fake identities created for the flood.
    pub created: Vec<AccountId>,
    /// Number of transactions attempted.
    pub attempts: usize,
    /// Number admitted to the pool.
    pub accepted: usize,
    /// Rejection reasons, in attempt order.
    pub rejections: Vec<AdmissionError>,
    /// Outcome of the sealing attempt, when the flood performs one.
    pub seal: Option<SealResult<Block>>,
}

impl SybilReport {
    /// Number of rejected attempts.
    pub fn rejected(&self) -> usize {
        self.rejections.len()
    }
}

impl<R: Rng> LedgerNode<R> {
    /// Drives a double-spend race: two conflicting transactions for the
    /// same `(attacker, amount)` pair to two different receivers,
    /// followed by a sealing attempt.
    ///
    /// The attacker is registered and its balance pinned to
    /// `attacker_balance` first (the reference pins 50 against two
    /// spends of 50). Which transaction survives — and whether the seal
    /// goes through at all — depends on the policy in force.
    pub fn run_double_spend_scenario(
        &mut self,
        attacker: impl Into<AccountId>,
        first_receiver: impl Into<AccountId>,
        second_receiver: impl Into<AccountId>,
        amount: u64,
        attacker_balance: u64,
    ) -> AdmissionResult<DoubleSpendReport> {
        let attacker = attacker.into();
        tracing::info!(attacker = %attacker, amount, "double-spend race initiated");

        self.register_account(attacker.clone())?;
        self.ledger_mut().set_balance(&attacker, attacker_balance)?;

        let first = self
            .submit_transaction(attacker.clone(), first_receiver.into(), amount)
            .map(|_| ());
        let second = self
            .submit_transaction(attacker.clone(), second_receiver.into(), amount)
            .map(|_| ());
        let seal = self.seal_pending_block();

        let attacker_balance = self
            .ledger()
            .get(&attacker)
            .map(|account| account.balance)
            .unwrap_or_default();
        Ok(DoubleSpendReport {
            attacker,
            first,
            second,
            seal,
            attacker_balance,
        })
    }

    /// Drives a Sybil flood without any admission cost for identities:
    /// `fake_count` fresh accounts, then `2 * fake_count` transactions
    /// from uniformly random registered accounts (fake or not) to the
    /// target, each for a random amount in 1..=5, then a sealing
    /// attempt.
    ///
    /// Absent a cost to create an identity, the fakes transact exactly
    /// as freely as everyone else.
    pub fn run_sybil_scenario(
        &mut self,
        fake_count: usize,
        target: impl Into<AccountId>,
    ) -> AdmissionResult<SybilReport> {
        let target = target.into();
        tracing::info!(fake_count, target = %target, "sybil flood initiated");

        let mut created = Vec::with_capacity(fake_count);
        for i in 1..=fake_count {
            let account = self.register_account(format!("fake_node_{i}"))?;
            created.push(account.id);
        }

        let attempts = fake_count * 2;
        let mut accepted = 0;
        let mut rejections = Vec::new();
        for _ in 0..attempts {
            let universe = self.ledger().ids();
            let sender = universe[self.rng.gen_range(0..universe.len())].clone();
            let amount = self.rng.gen_range(1..=5);
            match self.submit_transaction(sender, target.clone(), amount) {
                Ok(_) => accepted += 1,
                Err(err) => rejections.push(err),
            }
        }

        let seal = self.seal_pending_block();
        Ok(SybilReport {
            created,
            attempts,
            accepted,
            rejections,
            seal: Some(seal),
        })
    }

    /// Drives a Sybil flood against the stake gate: `fake_count`
    /// identities created with a uniformly random stake in 0..=10 —
    /// always below the reference participation minimum of 20 — each
    /// attempting one transaction of a random amount in 1..=5 to the
    /// target.
    ///
    /// Under the stake-gated policy every attempt from a stake-deficient
    /// identity is rejected.
    pub fn run_stake_sybil_scenario(
        &mut self,
        fake_count: usize,
        target: impl Into<AccountId>,
    ) -> AdmissionResult<SybilReport> {
        let target = target.into();
        tracing::info!(fake_count, target = %target, "low-stake sybil flood initiated");

        let mut created = Vec::with_capacity(fake_count);
        for i in 1..=fake_count {
            let id = AccountId::new(format!("sybil_node_{i}"));
            self.register_account(id.clone())?;
            let stake = self.rng.gen_range(0..=10);
            self.ledger_mut().set_stake(&id, stake)?;
            created.push(id);
        }

        let mut accepted = 0;
        let mut rejections = Vec::new();
        for id in &created {
            let amount = self.rng.gen_range(1..=5);
            match self.submit_transaction(id.clone(), target.clone(), amount) {
                Ok(_) => accepted += 1,
                Err(err) => rejections.push(err),
            }
        }

        Ok(SybilReport {
            attempts: created.len(),
            created,
            accepted,
            rejections,
            seal: None,
        })
    }
}
