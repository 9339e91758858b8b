//! # Content Hashing
//!
//! Deterministic SHA-256 content hashing over the canonical JSON encoding
//! of a serializable record, rendered as lowercase hex. Block linkage and
//! proof-of-work candidate evaluation both go through this module.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Hash an arbitrary serializable record.
///
/// The record is serialized to canonical JSON (struct fields in
/// declaration order) and digested with SHA-256. Deterministic and free
/// of side effects.
pub fn content_hash<T: Serialize>(record: &T) -> String {
    let bytes = serde_json::to_vec(record).expect("domain types serialize to JSON infallibly");
    let digest = Sha256::digest(&bytes);
    hex::encode(digest)
}

/// Hash the raw UTF-8 bytes of a string.
///
/// Proof-of-work evaluates candidates as `digest_str(&nonce.to_string())`:
/// the digest is over the decimal rendering itself, with no JSON framing.
pub fn digest_str(s: &str) -> String {
    hex::encode(Sha256::digest(s.as_bytes()))
}

/// Check whether a hex digest meets a leading-zero difficulty target.
///
/// The first `difficulty` hex characters must all be `'0'`.
pub fn meets_difficulty(digest: &str, difficulty: u32) -> bool {
    let difficulty = difficulty as usize;
    digest.len() >= difficulty && digest.bytes().take(difficulty).all(|c| c == b'0')
}
