//! Runtime configuration for the ledger engine.

use cc_consensus::ProofOfWork;
use cc_gossip::GossipConfig;
use cc_ledger::{AdmissionPolicy, Ledger};
use serde::Deserialize;

/// Engine configuration.
///
/// The defaults reproduce the reference run: difficulty 3, starting
/// balance 100, the open admission policy, and no gossip.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Proof-of-work difficulty in leading zero hex characters.
    pub difficulty: u32,

    /// Balance granted to every newly registered account.
    pub starting_balance: u64,

    /// Admission rule set in force for the whole run.
    pub policy: AdmissionPolicy,

    /// Gossip tuning; `None` disables relaying entirely.
    pub gossip: Option<GossipConfig>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            difficulty: ProofOfWork::DEFAULT_DIFFICULTY,
            starting_balance: Ledger::DEFAULT_STARTING_BALANCE,
            policy: AdmissionPolicy::default(),
            gossip: None,
        }
    }
}

impl NodeConfig {
    /// Configuration with the given policy and everything else at the
    /// reference defaults.
    pub fn with_policy(policy: AdmissionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }
}
