//! Core domain types used by the ledger
//!
//! This module defines the strongly-typed content hash used to link blocks
//! together, plus the block and payload types built on top of it. The goal
//! is to avoid "naked" strings in public APIs and instead use
//! domain-specific newtypes.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Block values and hashing.
pub mod block;
/// Ticket event payloads and their canonical serialization.
pub mod payload;

pub use block::Block;
pub use payload::{GenesisPayload, Payload, SalePayload};

/// Length in bytes of the SHA-256 digest backing every block hash.
pub const DIGEST_LEN: usize = 32;

/// Length in characters of a block hash rendered as lowercase hex.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// Sentinel `previous_hash` value carried by the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Strongly-typed block content hash (SHA-256, lowercase hex).
///
/// This type backs both a block's own `hash` field and the `previous_hash`
/// link to its predecessor. It is either a [`DIGEST_HEX_LEN`]-character hex
/// digest, or the fixed [`GENESIS_PREVIOUS_HASH`] sentinel in the genesis
/// block's `previous_hash` position. Wrapping the string avoids passing raw
/// hex around in public APIs.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHash(pub String);

impl BlockHash {
    /// Computes a new [`BlockHash`] as the SHA-256 digest of `data`.
    ///
    /// The result is deterministic for a given byte slice and is rendered
    /// as lowercase hex. It is suitable as a content hash, but it is
    /// **not** a password hash or KDF.
    pub fn compute(data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        BlockHash(hex::encode(digest))
    }

    /// Returns the fixed sentinel used as the genesis block's `previous_hash`.
    pub fn genesis_sentinel() -> Self {
        BlockHash(GENESIS_PREVIOUS_HASH.to_string())
    }

    /// Returns the digest text (lowercase hex, or the genesis sentinel).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_is_deterministic() {
        let a = BlockHash::compute(b"ticket");
        let b = BlockHash::compute(b"ticket");
        assert_eq!(a, b);
    }

    #[test]
    fn compute_produces_fixed_length_lowercase_hex() {
        let h = BlockHash::compute(b"anything");
        assert_eq!(h.as_str().len(), DIGEST_HEX_LEN);
        assert!(
            h.as_str()
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[test]
    fn different_inputs_produce_different_digests() {
        let a = BlockHash::compute(b"seat 12A");
        let b = BlockHash::compute(b"seat 12B");
        assert_ne!(a, b);
    }

    #[test]
    fn genesis_sentinel_is_the_fixed_marker() {
        let sentinel = BlockHash::genesis_sentinel();
        assert_eq!(sentinel.as_str(), GENESIS_PREVIOUS_HASH);
        assert_eq!(sentinel.to_string(), "0");
    }
}
