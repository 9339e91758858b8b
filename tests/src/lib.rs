//! # Crucible-Chain Test Suite
//!
//! Unified test crate containing:
//!
//! ```text
//! tests/src/
//! ├── exploits/        # Attack simulations
//! │   ├── double_spend.rs
//! │   └── sybil.rs
//! │
//! └── integration/     # Cross-subsystem engine flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cc-tests
//!
//! # By category
//! cargo test -p cc-tests integration::
//! cargo test -p cc-tests exploits::
//! ```

#![allow(dead_code)]

pub mod exploits;

/// Installs a fmt subscriber honoring `RUST_LOG`, once per process.
/// Safe to call from every test; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
