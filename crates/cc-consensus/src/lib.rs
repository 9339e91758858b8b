//! # Crucible-Chain Consensus
//!
//! Block construction and proof-of-work sealing.
//!
//! The [`Chain`] is an ordered, append-only sequence of sealed blocks,
//! each referencing the content hash of its predecessor. Sealing obtains
//! a nonce from [`ProofOfWork`], which searches for the smallest
//! non-negative integer whose stringified hash meets the leading-zero
//! difficulty target. The [`TransactionPool`] holds admitted transactions
//! awaiting inclusion and carries the in-order conflict scan used by the
//! block-level double-spend defense.
//!
//! The proof hashes only the stringified nonce, never the block body, so
//! sealing is decoupled from block contents. The chain performs no
//! validation on append: admission and the pre-seal conflict scan are the
//! only gates, and the chain trusts its caller.

#![warn(clippy::all)]

pub mod domain;

pub use domain::chain::Chain;
pub use domain::errors::{SealError, SealResult};
pub use domain::pool::TransactionPool;
pub use domain::pow::{find_nonce, ProofOfWork};
