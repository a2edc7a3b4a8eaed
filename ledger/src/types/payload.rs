//! Ticket event payloads and their canonical JSON form.
//!
//! A payload is the string-keyed event data that gets hashed into a block:
//! either the fixed genesis marker or one ticket sale. Payloads are
//! strongly typed rather than free-form maps so that the canonical
//! serialization order is fixed by field declaration, not by map iteration
//! order.

use serde::{Deserialize, Serialize};

/// Payload of the genesis block: the event label plus an info marker.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GenesisPayload {
    /// Event label, e.g. `"Concert A"`.
    pub event: String,
    /// Informational marker text, e.g. `"Genesis Block"`.
    pub info: String,
}

/// Payload of one ticket sale.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SalePayload {
    /// Event label, e.g. `"Concert A"`.
    pub event: String,
    /// Buyer name as supplied by the caller.
    pub buyer: String,
    /// Seat number as supplied by the caller.
    pub seat: String,
}

/// Block payload: the genesis marker or a single ticket sale.
///
/// The enum is untagged so it serializes to exactly the flat JSON object
/// `{"event":…,"info":…}` or `{"event":…,"buyer":…,"seat":…}` that the
/// display layer consumes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// Fixed payload of the chain's first block.
    Genesis(GenesisPayload),
    /// One recorded ticket sale.
    Sale(SalePayload),
}

impl Payload {
    /// Returns the canonical JSON representation of this payload.
    ///
    /// This is the form that gets hashed into the block, so it must remain
    /// byte-stable over time. Keys are emitted in declared field order
    /// (`event, info` for genesis; `event, buyer, seat` for sales) with
    /// compact separators. All hashing that depends on a "canonical" form
    /// goes through this method to avoid format drift.
    ///
    /// # Panics
    ///
    /// Panics if encoding fails. This is considered a programming error,
    /// because all fields are plain strings and always serializable.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).expect("payload should always be serializable as JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_canonical_json_uses_declared_key_order() {
        let payload = Payload::Genesis(GenesisPayload {
            event: "Concert A".to_string(),
            info: "Genesis Block".to_string(),
        });

        assert_eq!(
            payload.canonical_json(),
            r#"{"event":"Concert A","info":"Genesis Block"}"#
        );
    }

    #[test]
    fn sale_canonical_json_uses_declared_key_order() {
        let payload = Payload::Sale(SalePayload {
            event: "Concert A".to_string(),
            buyer: "Alice".to_string(),
            seat: "12A".to_string(),
        });

        assert_eq!(
            payload.canonical_json(),
            r#"{"event":"Concert A","buyer":"Alice","seat":"12A"}"#
        );
    }

    #[test]
    fn canonical_json_is_byte_stable() {
        let payload = Payload::Sale(SalePayload {
            event: "Concert A".to_string(),
            buyer: "Bob".to_string(),
            seat: "7C".to_string(),
        });

        assert_eq!(payload.canonical_json(), payload.canonical_json());
    }
}
