//! Proof-of-work nonce search.
//!
//! The puzzle: find the smallest nonce n ≥ 0 such that the SHA-256 digest
//! of the decimal string `n` starts with `difficulty` zero hex characters.
//! Expected iterations ≈ 16^difficulty, so the search is cheap for the
//! reference difficulties (2–4) and unbounded in theory.
//!
//! The digest covers only the stringified nonce — never the block body —
//! so two blocks sealed at the same difficulty always mine the same
//! nonce. The search is a pure function of the difficulty.

use crate::domain::errors::{SealError, SealResult};
use shared_types::hashing::{digest_str, meets_difficulty};
use std::sync::atomic::{AtomicBool, Ordering};

/// Finds the smallest nonce whose stringified hash meets the difficulty.
///
/// Blocks the caller until a nonce is found; there is no timeout.
pub fn find_nonce(difficulty: u32) -> u64 {
    let mut nonce = 0u64;
    loop {
        if meets_difficulty(&digest_str(&nonce.to_string()), difficulty) {
            tracing::debug!(nonce, difficulty, "proof-of-work nonce found");
            return nonce;
        }
        nonce += 1;
    }
}

/// Proof-of-work sealer for a fixed difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProofOfWork {
    difficulty: u32,
}

impl ProofOfWork {
    /// Reference mining difficulty (leading zero hex characters).
    pub const DEFAULT_DIFFICULTY: u32 = 3;

    /// Creates a sealer for the given difficulty.
    pub fn new(difficulty: u32) -> Self {
        Self { difficulty }
    }

    /// Creates a sealer with the reference difficulty.
    pub fn with_defaults() -> Self {
        Self::new(Self::DEFAULT_DIFFICULTY)
    }

    /// The difficulty this sealer mines at.
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Mines the smallest satisfying nonce. Blocks until found.
    pub fn seal(&self) -> u64 {
        find_nonce(self.difficulty)
    }

    /// Mines the smallest satisfying nonce, giving up when `cancel` is
    /// raised.
    ///
    /// Extension over the baseline contract: the flag is polled once per
    /// candidate so an abandoned mining attempt running on a worker can
    /// be torn down cleanly.
    pub fn seal_cancellable(&self, cancel: &AtomicBool) -> SealResult<u64> {
        let mut nonce = 0u64;
        loop {
            if cancel.load(Ordering::Relaxed) {
                tracing::debug!(nonce, difficulty = self.difficulty, "mining cancelled");
                return Err(SealError::Cancelled);
            }
            if meets_difficulty(&digest_str(&nonce.to_string()), self.difficulty) {
                tracing::debug!(nonce, difficulty = self.difficulty, "proof-of-work nonce found");
                return Ok(nonce);
            }
            nonce += 1;
        }
    }
}

impl Default for ProofOfWork {
    fn default() -> Self {
        Self::with_defaults()
    }
}
