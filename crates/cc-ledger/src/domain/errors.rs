//! Admission error types.

use shared_types::{AccountId, SpendKey};

/// Result type alias for admission operations.
pub type AdmissionResult<T> = Result<T, AdmissionError>;

/// Why a transaction was refused entry to the pending pool.
///
/// Every variant is recoverable: the engine stays usable after any
/// rejection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    /// Malformed submission: empty identifier or non-positive amount.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was malformed about the submission.
        reason: String,
    },

    /// The sender has never been registered.
    #[error("unknown sender: {0}")]
    UnknownSender(AccountId),

    /// The `(sender, amount)` pair was already spent.
    #[error("double spend: {0} already spent")]
    DoubleSpend(SpendKey),

    /// The sender's stake is below the participation minimum.
    #[error("insufficient stake: {stake} < minimum {minimum}")]
    InsufficientStake {
        /// The sender's committed stake.
        stake: u64,
        /// The configured participation minimum.
        minimum: u64,
    },

    /// The sender's balance cannot cover the amount.
    #[error("insufficient balance: {balance} < amount {amount}")]
    InsufficientBalance {
        /// The sender's balance at evaluation time.
        balance: u64,
        /// The requested amount.
        amount: u64,
    },
}
