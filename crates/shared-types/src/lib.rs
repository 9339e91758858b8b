//! # Shared Types Crate
//!
//! This crate contains all domain entities shared across subsystems, plus
//! the content-hashing utilities used for block linkage and proof-of-work.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Typed Identifiers**: Account identifiers are a newtype over `String`
//!   so they cannot be confused with amounts or block indices.
//! - **Deterministic Hashing**: Entities hash over their canonical JSON
//!   encoding, which has stable struct-field ordering.

pub mod entities;
pub mod hashing;

pub use entities::*;
pub use hashing::*;
