//! Block values and hashing.
//!
//! This module defines the block structure used by the ledger, together
//! with the canonical hashing routine that links blocks into a chain.
//!
//! The hash preimage is the concatenation of the block's index, its
//! timestamp, the payload's canonical JSON (see
//! [`Payload::canonical_json`]), and the previous block's hash text. The
//! same preimage layout is used everywhere block bytes are hashed.

use serde::{Deserialize, Serialize};

use super::{BlockHash, Payload};

/// One hash-linked entry in the ledger.
///
/// A block's `hash` is computed once at construction from the other four
/// fields and is never recomputed in place. The ledger itself never
/// mutates a stored block; any mutation after construction is tampering,
/// which chain verification detects by recomputing the hash from the
/// stored fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    /// Position of this block in the chain, starting from 0 at genesis.
    pub index: u64,

    /// Wall-clock timestamp of the block, in seconds since Unix epoch.
    ///
    /// Used for observability only; verification does not require
    /// timestamps to be monotone.
    pub timestamp: u64,

    /// Event data recorded by this block.
    pub payload: Payload,

    /// Hash of the previous block, or the `"0"` sentinel at genesis.
    pub previous_hash: BlockHash,

    /// Content hash of this block, computed at construction.
    pub hash: BlockHash,
}

impl Block {
    /// Builds a new block and computes its content hash immediately.
    pub fn new(index: u64, timestamp: u64, payload: Payload, previous_hash: BlockHash) -> Self {
        let hash = Self::compute_hash(index, timestamp, &payload, &previous_hash);
        Block {
            index,
            timestamp,
            payload,
            previous_hash,
            hash,
        }
    }

    /// Computes the canonical content hash for a block's fields.
    ///
    /// The preimage is `index ++ timestamp ++ canonical payload JSON ++
    /// previous hash`, each rendered as text, hashed with SHA-256. This
    /// must remain stable over time for stored hashes to stay verifiable.
    pub fn compute_hash(
        index: u64,
        timestamp: u64,
        payload: &Payload,
        previous_hash: &BlockHash,
    ) -> BlockHash {
        let preimage = format!(
            "{index}{timestamp}{}{}",
            payload.canonical_json(),
            previous_hash.as_str()
        );
        BlockHash::compute(preimage.as_bytes())
    }

    /// Recomputes the content hash from this block's stored fields.
    ///
    /// For an untampered block this equals the stored [`Block::hash`];
    /// verification compares the two to detect in-place edits.
    pub fn recompute_hash(&self) -> BlockHash {
        Self::compute_hash(self.index, self.timestamp, &self.payload, &self.previous_hash)
    }
}
