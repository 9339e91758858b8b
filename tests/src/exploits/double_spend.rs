//! # Double-Spend Race
//!
//! An attacker with a single balance submits two conflicting transactions
//! — same sender, same amount, different receivers — and tries to get
//! value accepted twice. What stops the race depends entirely on the
//! admission policy in force:
//!
//! | Policy              | First tx | Second tx              | Seal        |
//! |---------------------|----------|------------------------|-------------|
//! | Open                | Accepted | InsufficientBalance    | Block mined |
//! | Spent-set guarded   | Accepted | DoubleSpend            | Block mined |
//! | Block-level guarded | Accepted | Accepted (balance 100) | Aborted     |

#[cfg(test)]
mod tests {
    use cc_consensus::SealError;
    use cc_ledger::{AdmissionError, AdmissionPolicy};
    use node_runtime::{LedgerNode, NodeConfig};

    fn node(policy: AdmissionPolicy) -> LedgerNode {
        crate::init_tracing();
        let config = NodeConfig {
            difficulty: 1,
            ..NodeConfig::with_policy(policy)
        };
        let mut node = LedgerNode::seeded(config, 0xAB);
        for i in 1..=2 {
            node.register_account(format!("node_{i}")).unwrap();
        }
        node
    }

    #[test]
    fn open_policy_only_the_balance_stops_the_race() {
        let mut node = node(AdmissionPolicy::Open);
        node.register_account("attacker_node").unwrap();
        node.ledger_mut()
            .set_balance(&"attacker_node".into(), 50)
            .unwrap();

        assert!(node
            .submit_transaction("attacker_node", "node_1", 50)
            .is_ok());
        let err = node
            .submit_transaction("attacker_node", "node_2", 50)
            .unwrap_err();
        assert_eq!(
            err,
            AdmissionError::InsufficientBalance {
                balance: 0,
                amount: 50
            }
        );

        // The first spend seals normally: nothing about the race was
        // detected, the attacker simply ran out of funds.
        let block = node.seal_pending_block().unwrap();
        assert_eq!(block.transactions.transactions().len(), 1);
    }

    #[test]
    fn spent_set_policy_names_the_attack_at_submission() {
        let mut node = node(AdmissionPolicy::SpentSetGuarded);
        node.register_account("attacker_node").unwrap();

        // Even with funds left for the second spend, the repeated
        // (sender, amount) pair is refused.
        assert!(node
            .submit_transaction("attacker_node", "node_1", 40)
            .is_ok());
        let err = node
            .submit_transaction("attacker_node", "node_2", 40)
            .unwrap_err();
        assert!(matches!(err, AdmissionError::DoubleSpend(_)));

        // The silent rejection debits nothing further.
        assert_eq!(
            node.ledger().get(&"attacker_node".into()).unwrap().balance,
            60
        );
    }

    #[test]
    fn block_level_policy_admits_both_then_aborts_the_block() {
        let mut node = node(AdmissionPolicy::BlockLevelGuarded);
        node.register_account("attacker_node").unwrap();

        // Balance 100 covers both 50s, so admission waves both through.
        assert!(node
            .submit_transaction("attacker_node", "node_1", 50)
            .is_ok());
        assert!(node
            .submit_transaction("attacker_node", "node_2", 50)
            .is_ok());
        assert_eq!(node.pending().len(), 2);

        let result = node.seal_pending_block();
        assert!(matches!(result, Err(SealError::ConflictDetected(_))));

        // The whole pool is discarded and the chain did not grow.
        assert!(node.pending().is_empty());
        assert_eq!(node.chain().len(), 1);

        // Reproducible quirk of the reference behavior: the admission
        // debits are not rolled back when the pool is discarded.
        assert_eq!(
            node.ledger().get(&"attacker_node".into()).unwrap().balance,
            0
        );
    }

    #[test]
    fn scenario_driver_reports_the_same_outcomes() {
        let mut node = node(AdmissionPolicy::SpentSetGuarded);
        let report = node
            .run_double_spend_scenario("attacker_node", "node_1", "node_2", 50, 50)
            .unwrap();

        assert_eq!(report.first, Ok(()));
        assert!(matches!(report.second, Err(AdmissionError::DoubleSpend(_))));
        assert!(report.seal.is_ok());
        assert_eq!(report.attacker_balance, 0);
    }

    #[test]
    fn aborted_seal_does_not_poison_later_blocks() {
        let mut node = node(AdmissionPolicy::BlockLevelGuarded);
        node.register_account("attacker_node").unwrap();

        node.submit_transaction("attacker_node", "node_1", 50)
            .unwrap();
        node.submit_transaction("attacker_node", "node_2", 50)
            .unwrap();
        assert!(node.seal_pending_block().is_err());

        // An honest transaction after the abort seals cleanly.
        node.submit_transaction("node_1", "node_2", 10).unwrap();
        let block = node.seal_pending_block().unwrap();
        assert_eq!(block.index, 2);
        assert_eq!(block.transactions.transactions().len(), 1);
    }
}
