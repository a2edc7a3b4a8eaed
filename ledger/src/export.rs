//! Read-only records for the display layer.
//!
//! The ledger exposes its contents to a presentation layer as a flat list
//! of [`DisplayRecord`]s. Records are owned projections, not references
//! into ledger storage, so a renderer can hold them freely without being
//! able to mutate the chain.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{Block, Payload};

/// Read-only projection of one block, suitable for rendering.
#[derive(Clone, Debug, Serialize)]
pub struct DisplayRecord {
    /// Position of the block in the chain.
    pub index: u64,
    /// Human-readable rendering of the block timestamp (RFC 3339, UTC).
    pub timestamp_text: String,
    /// The block's event data.
    pub payload: Payload,
    /// The block's content hash, as lowercase hex.
    pub hash: String,
    /// The predecessor's hash, or `"0"` for genesis.
    pub previous_hash: String,
}

impl DisplayRecord {
    /// Projects a block into its display form.
    pub fn from_block(block: &Block) -> Self {
        Self {
            index: block.index,
            timestamp_text: format_timestamp(block.timestamp),
            payload: block.payload.clone(),
            hash: block.hash.as_str().to_string(),
            previous_hash: block.previous_hash.as_str().to_string(),
        }
    }
}

/// Renders a unix-seconds timestamp as RFC 3339 UTC text.
///
/// Falls back to the raw number for instants chrono cannot represent.
fn format_timestamp(secs: u64) -> String {
    match DateTime::<Utc>::from_timestamp(secs as i64, 0) {
        Some(dt) => dt.to_rfc3339(),
        None => secs.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Block, BlockHash, SalePayload};

    #[test]
    fn record_mirrors_the_block_fields() {
        let payload = Payload::Sale(SalePayload {
            event: "Concert A".to_string(),
            buyer: "Alice".to_string(),
            seat: "12A".to_string(),
        });
        let block = Block::new(1, 1_700_000_000, payload, BlockHash::compute(b"parent"));

        let record = DisplayRecord::from_block(&block);

        assert_eq!(record.index, block.index);
        assert_eq!(record.payload, block.payload);
        assert_eq!(record.hash, block.hash.as_str());
        assert_eq!(record.previous_hash, block.previous_hash.as_str());
    }

    #[test]
    fn timestamp_text_is_rfc3339_utc() {
        assert_eq!(format_timestamp(0), "1970-01-01T00:00:00+00:00");
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn record_serializes_payload_as_a_flat_map() {
        let payload = Payload::Sale(SalePayload {
            event: "Concert A".to_string(),
            buyer: "Bob".to_string(),
            seat: "7C".to_string(),
        });
        let block = Block::new(1, 0, payload, BlockHash::genesis_sentinel());
        let record = DisplayRecord::from_block(&block);

        let json = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(json["payload"]["buyer"], "Bob");
        assert_eq!(json["payload"]["seat"], "7C");
        assert_eq!(json["previous_hash"], "0");
    }
}
