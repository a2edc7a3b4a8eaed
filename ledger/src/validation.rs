//! Chain-integrity verification.
//!
//! Verification walks the chain from index 1 and, for each block:
//!
//! - recomputes the content hash from the block's stored fields and
//!   compares it to the stored hash (catches in-place field edits), and
//! - checks that `previous_hash` matches the predecessor's stored hash
//!   (catches link tampering or reordering).
//!
//! It short-circuits on the first fault found. A chain holding only the
//! genesis block is always valid.

use crate::types::Block;

/// What failed at a particular block.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FaultKind {
    /// Stored hash does not match the hash recomputed from the block's fields.
    HashMismatch,
    /// `previous_hash` does not match the predecessor's stored hash.
    BrokenLink,
}

/// First failing block found by chain verification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChainFault {
    /// Index of the block at which verification failed.
    pub index: usize,
    /// Which integrity check failed there.
    pub kind: FaultKind,
}

/// Returns the first chain fault, or `None` if the chain verifies.
///
/// The hash check runs before the link check at each position, so a block
/// that fails both reports [`FaultKind::HashMismatch`].
pub fn first_invalid(chain: &[Block]) -> Option<ChainFault> {
    for i in 1..chain.len() {
        let current = &chain[i];
        let prev = &chain[i - 1];

        if current.recompute_hash() != current.hash {
            tracing::warn!(index = i, "stored block hash does not match its fields");
            return Some(ChainFault {
                index: i,
                kind: FaultKind::HashMismatch,
            });
        }

        if current.previous_hash != prev.hash {
            tracing::warn!(index = i, "block link does not match predecessor hash");
            return Some(ChainFault {
                index: i,
                kind: FaultKind::BrokenLink,
            });
        }
    }

    None
}

/// Boolean view of [`first_invalid`].
pub fn is_chain_valid(chain: &[Block]) -> bool {
    first_invalid(chain).is_none()
}
