//! Sealing error types.

use shared_types::SpendKey;

/// Result type alias for sealing operations.
pub type SealResult<T> = Result<T, SealError>;

/// Why a sealing attempt produced no block.
///
/// Every variant is recoverable; the chain is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SealError {
    /// The pending pool holds no transactions.
    #[error("no pending transactions to seal")]
    EmptyPool,

    /// The pre-seal scan found a repeated spend in the pool. The pool is
    /// discarded; balances already debited at admission stay debited.
    #[error("conflicting spend detected in pool: {0}")]
    ConflictDetected(SpendKey),

    /// The cancellation flag was raised while mining.
    #[error("mining cancelled before a nonce was found")]
    Cancelled,
}
