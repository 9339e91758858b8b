//! # Crucible-Chain Ledger
//!
//! Account lifecycle and transaction admission.
//!
//! The [`Ledger`] owns the account table: every account is created on
//! first registration with a fixed starting balance and zero stake, and is
//! never destroyed during a run. The [`AdmissionController`] evaluates a
//! pluggable predicate set over that table before a transaction may enter
//! the pending pool: balance sufficiency, duplicate-spend detection, and
//! stake eligibility, depending on the configured [`AdmissionPolicy`].
//!
//! Accepted transactions debit the sender **at admission time** — not at
//! sealing time. A transaction later discarded from the pool does not get
//! its debit rolled back.

#![warn(clippy::all)]

pub mod domain;

pub use domain::accounts::Ledger;
pub use domain::admission::{AdmissionController, AdmissionPolicy};
pub use domain::errors::{AdmissionError, AdmissionResult};
