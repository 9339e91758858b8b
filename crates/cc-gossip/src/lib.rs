//! # Crucible-Chain Gossip
//!
//! Simulated eventual, unreliable, best-effort broadcast of an admitted
//! transaction across the registered accounts.
//!
//! For each account, with independent probability
//! [`GossipConfig::relay_probability`], [`GossipConfig::fanout`] distinct
//! peers are sampled uniformly from the whole account universe, and every
//! sampled peer other than the relaying account receives a notification.
//! Relaying is observation only — it never changes consensus state.
//!
//! All randomness flows through the caller-supplied [`rand::Rng`], so a
//! seeded generator makes every relay fully deterministic.

#![warn(clippy::all)]

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared_types::{AccountId, Transaction};

/// Tuning knobs for the relay simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GossipConfig {
    /// Chance that a given account relays at all.
    pub relay_probability: f64,
    /// Number of distinct peers each relaying account samples.
    pub fanout: usize,
}

impl Default for GossipConfig {
    fn default() -> Self {
        Self {
            relay_probability: 0.7,
            fanout: 2,
        }
    }
}

/// One observed notification: `relayer` passed the transaction to `peer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// The account that relayed.
    pub relayer: AccountId,
    /// The account that was notified.
    pub peer: AccountId,
}

/// Fan-out relay of a transaction to random subsets of peers.
#[derive(Clone, Debug, Default)]
pub struct GossipSimulator {
    config: GossipConfig,
}

impl GossipSimulator {
    /// Creates a simulator with the given tuning.
    pub fn new(config: GossipConfig) -> Self {
        Self { config }
    }

    /// Creates a simulator with the reference tuning (p = 0.7, fanout 2).
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The tuning in force.
    pub fn config(&self) -> &GossipConfig {
        &self.config
    }

    /// Relays a transaction across the account universe.
    ///
    /// Returns the observed deliveries in relay order. Fewer registered
    /// accounts than the fanout clamps the sample size instead of
    /// failing.
    pub fn relay<R: Rng + ?Sized>(
        &self,
        tx: &Transaction,
        accounts: &[AccountId],
        rng: &mut R,
    ) -> Vec<Delivery> {
        let sample_size = self.config.fanout.min(accounts.len());
        let mut deliveries = Vec::new();

        for relayer in accounts {
            if rng.gen::<f64>() >= self.config.relay_probability {
                continue;
            }
            for peer in accounts.choose_multiple(rng, sample_size) {
                if peer != relayer {
                    tracing::trace!(
                        relayer = %relayer,
                        peer = %peer,
                        sender = %tx.sender,
                        amount = tx.amount,
                        "transaction relayed"
                    );
                    deliveries.push(Delivery {
                        relayer: relayer.clone(),
                        peer: peer.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            deliveries = deliveries.len(),
            accounts = accounts.len(),
            "transaction gossiped across the network"
        );
        deliveries
    }
}
