//! # Crucible-Chain Node Runtime
//!
//! Composes the subsystems into a usable engine: one [`LedgerNode`] owns
//! the account table, the admission controller, the pending pool, the
//! chain, the proof-of-work sealer, and (optionally) the gossip
//! simulator, and every operation runs to completion before the next is
//! invoked.
//!
//! The engine is single-writer by construction — all state is owned by
//! the node value and mutated through `&mut self`. There are no
//! process-wide singletons; callers hold the node and the attack
//! scenario drivers take it explicitly.
//!
//! Randomized behavior (gossip fan-out, scenario amounts and stakes)
//! draws from a random source injected at construction, so a seeded
//! node replays identically.

#![warn(clippy::all)]

mod config;
pub mod scenarios;
mod service;

pub use config::NodeConfig;
pub use scenarios::{DoubleSpendReport, SybilReport};
pub use service::{Admitted, LedgerNode};

// Re-export the subsystem surface callers need alongside the engine.
pub use cc_consensus::{SealError, SealResult};
pub use cc_gossip::{Delivery, GossipConfig};
pub use cc_ledger::{AdmissionError, AdmissionPolicy, AdmissionResult};
