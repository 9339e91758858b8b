//! # Sybil Identity Flood
//!
//! An adversary mass-creates fake identities and floods the network with
//! transactions. With identity creation free and unguarded, the fakes
//! transact exactly as freely as long-standing accounts; with a stake
//! gate in force, identities below the participation minimum are shut
//! out wholesale.

#[cfg(test)]
mod tests {
    use cc_gossip::GossipConfig;
    use cc_ledger::{AdmissionError, AdmissionPolicy};
    use node_runtime::{LedgerNode, NodeConfig};

    fn node(policy: AdmissionPolicy, gossip: Option<GossipConfig>) -> LedgerNode {
        crate::init_tracing();
        let config = NodeConfig {
            difficulty: 1,
            gossip,
            ..NodeConfig::with_policy(policy)
        };
        let mut node = LedgerNode::seeded(config, 0x51B1);
        for i in 1..=5 {
            node.register_account(format!("node_{i}")).unwrap();
        }
        node
    }

    #[test]
    fn fakes_transact_on_the_same_footing_as_honest_accounts() {
        let mut node = node(AdmissionPolicy::Open, None);
        let report = node.run_sybil_scenario(5, "node_1").unwrap();

        assert_eq!(report.created.len(), 5);
        assert_eq!(report.attempts, 10);
        // Identity alone rejects nothing: every fake has the same
        // starting balance as a real account and amounts top out at 5.
        assert_eq!(report.accepted, 10);
        assert!(report.rejections.is_empty());

        // The flood sealed into a real block.
        let block = report.seal.unwrap().unwrap();
        assert_eq!(block.transactions.transactions().len(), 10);
    }

    #[test]
    fn fake_accounts_start_with_the_full_default_balance() {
        let mut node = node(AdmissionPolicy::Open, None);
        node.run_sybil_scenario(3, "node_1").unwrap();

        for i in 1..=3 {
            let id = format!("fake_node_{i}").into();
            let account = node.ledger().get(&id).unwrap();
            assert!(account.balance <= 100);
            assert_eq!(account.stake, 0);
        }
    }

    #[test]
    fn flood_replays_identically_for_the_same_seed() {
        let mut a = node(AdmissionPolicy::Open, None);
        let mut b = node(AdmissionPolicy::Open, None);

        let ra = a.run_sybil_scenario(4, "node_1").unwrap();
        let rb = b.run_sybil_scenario(4, "node_1").unwrap();
        assert_eq!(ra.accepted, rb.accepted);
        assert_eq!(a.balances(), b.balances());
    }

    #[test]
    fn gossip_observes_the_flood_without_touching_balances() {
        let mut node = node(AdmissionPolicy::Open, Some(GossipConfig::default()));
        let before = node.balances();

        let receipt = node.submit_transaction("node_2", "node_1", 5).unwrap();
        // Relaying notified peers but moved no money besides the
        // admission debit itself.
        let mut after = node.balances();
        for account in &mut after {
            if account.id == "node_2".into() {
                account.balance += 5;
            }
        }
        assert_eq!(before, after);
        assert!(receipt.gossip.iter().all(|d| d.relayer != d.peer));
    }

    #[test]
    fn stake_gate_rejects_every_low_stake_identity() {
        let mut node = node(AdmissionPolicy::stake_gated(), None);
        let report = node.run_stake_sybil_scenario(8, "node_1").unwrap();

        assert_eq!(report.attempts, 8);
        assert_eq!(report.accepted, 0);
        assert_eq!(report.rejected(), 8);
        for err in &report.rejections {
            match err {
                AdmissionError::InsufficientStake { stake, minimum } => {
                    assert!(*stake <= 10);
                    assert_eq!(*minimum, AdmissionPolicy::DEFAULT_MINIMUM_STAKE);
                }
                other => panic!("expected a stake rejection, got {other}"),
            }
        }
    }

    #[test]
    fn staked_identity_passes_the_gate_the_fakes_fail() {
        let mut node = node(AdmissionPolicy::stake_gated(), None);
        node.ledger_mut()
            .set_stake(&"node_1".into(), 25)
            .unwrap();

        assert!(node.submit_transaction("node_1", "node_2", 5).is_ok());

        let report = node.run_stake_sybil_scenario(4, "node_2").unwrap();
        assert_eq!(report.accepted, 0);
    }

    #[test]
    fn stake_rejections_leave_balances_untouched() {
        let mut node = node(AdmissionPolicy::stake_gated(), None);
        let report = node.run_stake_sybil_scenario(5, "node_1").unwrap();

        for id in &report.created {
            assert_eq!(node.ledger().get(id).unwrap().balance, 100);
        }
    }
}
