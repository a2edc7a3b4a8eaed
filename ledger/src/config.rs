//! Ledger configuration.
//!
//! A single struct carrying the fixed text stamped into payloads: the
//! event label shared by every block and the informational text of the
//! genesis block. Callers that want the original demo values can use
//! [`LedgerConfig::default`].

/// Configuration for a ticket ledger.
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Event label written into every payload, e.g. `"Concert A"`.
    pub event: String,
    /// Informational text carried by the genesis payload.
    pub genesis_info: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            event: "Concert A".to_string(),
            genesis_info: "Genesis Block".to_string(),
        }
    }
}
