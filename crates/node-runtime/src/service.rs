//! The ledger engine.
//!
//! Control flow per submission: the admission controller validates the
//! transaction against ledger state (debiting the sender on acceptance),
//! the transaction enters the pending pool, and — when gossip is enabled
//! — the relay simulator fans it out. Sealing drains the pool into a
//! proof-of-work-sealed block and appends it to the chain.

use crate::config::NodeConfig;
use cc_consensus::{Chain, ProofOfWork, SealError, SealResult, TransactionPool};
use cc_gossip::{Delivery, GossipSimulator};
use cc_ledger::{AdmissionController, AdmissionError, AdmissionPolicy, AdmissionResult, Ledger};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::{Account, AccountId, Block, BlockBody, Transaction};

/// Receipt for an accepted transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Admitted {
    /// The transaction now sitting in the pending pool.
    pub transaction: Transaction,
    /// Gossip deliveries observed for this submission; empty when gossip
    /// is disabled.
    pub gossip: Vec<Delivery>,
}

/// A single-writer proof-of-work ledger engine.
///
/// Owns every piece of consensus state. The genesis block is sealed at
/// construction, so a fresh node already has a chain of height one.
#[derive(Debug)]
pub struct LedgerNode<R: Rng = StdRng> {
    config: NodeConfig,
    ledger: Ledger,
    admission: AdmissionController,
    pool: TransactionPool,
    chain: Chain,
    pow: ProofOfWork,
    gossip: Option<GossipSimulator>,
    pub(crate) rng: R,
}

impl LedgerNode<StdRng> {
    /// Creates a node whose random source is seeded for replayable runs.
    pub fn seeded(config: NodeConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LedgerNode<R> {
    /// Creates a node around an injected random source.
    ///
    /// All randomized behavior (gossip fan-out, scenario amounts and
    /// stakes) draws from this source and nothing else.
    pub fn with_rng(config: NodeConfig, rng: R) -> Self {
        let pow = ProofOfWork::new(config.difficulty);
        let chain = Chain::with_genesis(&pow);
        tracing::info!(
            difficulty = config.difficulty,
            policy = ?config.policy,
            "ledger node started"
        );
        Self {
            ledger: Ledger::new(config.starting_balance),
            admission: AdmissionController::new(config.policy.clone()),
            pool: TransactionPool::new(),
            chain,
            pow,
            gossip: config.gossip.clone().map(GossipSimulator::new),
            rng,
            config,
        }
    }

    /// The admission policy in force.
    pub fn policy(&self) -> &AdmissionPolicy {
        &self.config.policy
    }

    /// Registers an account, idempotently.
    pub fn register_account(&mut self, id: impl Into<AccountId>) -> AdmissionResult<Account> {
        let id = id.into();
        if id.is_empty() {
            return Err(AdmissionError::InvalidInput {
                reason: "empty account identifier".to_owned(),
            });
        }
        Ok(self.ledger.register(id).clone())
    }

    /// Submits a transaction for admission.
    ///
    /// On acceptance the sender is already debited, the transaction sits
    /// in the pending pool, and the receipt carries any gossip
    /// deliveries. On rejection nothing has changed.
    pub fn submit_transaction(
        &mut self,
        sender: impl Into<AccountId>,
        receiver: impl Into<AccountId>,
        amount: u64,
    ) -> AdmissionResult<Admitted> {
        let tx = Transaction::new(sender.into(), receiver.into(), amount);
        if let Err(err) = self.admission.admit(&mut self.ledger, &tx) {
            tracing::debug!(sender = %tx.sender, amount = tx.amount, %err, "transaction rejected");
            return Err(err);
        }
        self.pool.push(tx.clone());

        let gossip = match &self.gossip {
            Some(sim) => sim.relay(&tx, &self.ledger.ids(), &mut self.rng),
            None => Vec::new(),
        };
        Ok(Admitted {
            transaction: tx,
            gossip,
        })
    }

    /// Seals every pending transaction into the next block.
    ///
    /// Under the block-level guarded policy the pool is scanned first;
    /// a detected conflict aborts the attempt, discards the whole pool,
    /// and leaves the chain untouched. Balances debited at admission are
    /// never restored.
    pub fn seal_pending_block(&mut self) -> SealResult<Block> {
        if self.pool.is_empty() {
            return Err(SealError::EmptyPool);
        }

        if self.config.policy == AdmissionPolicy::BlockLevelGuarded {
            if let Some(conflict) = self.pool.first_conflict() {
                self.pool.clear();
                tracing::warn!(spend = %conflict, "seal aborted, pool discarded");
                return Err(SealError::ConflictDetected(conflict));
            }
        }

        let body = BlockBody::Transactions(self.pool.take_all());
        let block = self.chain.build_block(body, &self.pow);
        self.chain.append(block.clone());
        Ok(block)
    }

    /// Read-only view of the sealed chain, genesis first.
    pub fn chain(&self) -> &[Block] {
        self.chain.blocks()
    }

    /// Read-only view of the pending pool, in admission order.
    pub fn pending(&self) -> &[Transaction] {
        self.pool.transactions()
    }

    /// Point-in-time balances and stakes, in identifier order.
    pub fn balances(&self) -> Vec<Account> {
        self.ledger.snapshot()
    }

    /// The account table, for direct inspection and scenario hooks.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Mutable account table access (scenario hooks: pinning balances
    /// and stakes).
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
}
