//! The append-only ticket ledger.
//!
//! The [`Ledger`] owns the ordered block sequence and is its sole writer.
//! It is created with exactly one genesis block, grows by one block per
//! recorded sale, and never shrinks or reorders. Validity is a derived
//! predicate recomputed on demand, not stored state: nothing blocks
//! appends to a tampered chain, and a new block links against whatever
//! `latest().hash` currently is.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::export::DisplayRecord;
use crate::types::{Block, BlockHash, GenesisPayload, Payload, SalePayload};
use crate::validation::{self, ChainFault};

/// Append-only, hash-linked sequence of ticket-sale blocks.
///
/// The ledger is a synchronous in-memory structure with a single writer;
/// `&mut self` on [`Ledger::append_sale`] lets the borrow checker enforce
/// that in-process. Callers sharing one ledger across threads must wrap it
/// in their own lock, holding it exclusively around appends.
pub struct Ledger {
    config: LedgerConfig,
    chain: Vec<Block>,
}

impl Ledger {
    /// Creates a ledger with the default event configuration.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Creates a ledger for the configured event.
    ///
    /// The chain starts with exactly one genesis block: index 0, the
    /// configured event and info text, timestamped at creation time, and
    /// linked against the fixed `"0"` sentinel.
    pub fn with_config(config: LedgerConfig) -> Self {
        let payload = Payload::Genesis(GenesisPayload {
            event: config.event.clone(),
            info: config.genesis_info.clone(),
        });
        let genesis = Block::new(0, unix_time_now(), payload, BlockHash::genesis_sentinel());
        tracing::debug!(hash = %genesis.hash, "created genesis block");

        Self {
            config,
            chain: vec![genesis],
        }
    }

    /// Returns the last block in the chain.
    ///
    /// The chain always holds at least the genesis block, so this never
    /// fails.
    pub fn latest(&self) -> &Block {
        self.chain
            .last()
            .expect("ledger always holds at least the genesis block")
    }

    /// Returns the number of blocks in the chain (genesis included).
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `false`: the chain always holds at least the genesis block.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns the blocks in chain order.
    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    /// Records one ticket sale, timestamped with the current wall clock.
    ///
    /// Rejects empty buyer or seat strings with
    /// [`LedgerError::InvalidInput`]; no other validation is performed.
    /// On success the new block is appended, linked against the current
    /// tip, and returned.
    pub fn append_sale(&mut self, buyer: &str, seat: &str) -> Result<&Block, LedgerError> {
        self.append_sale_at(buyer, seat, unix_time_now())
    }

    /// Records one ticket sale with an explicit timestamp.
    ///
    /// Timestamps are not required to be monotone; the chain links by
    /// hash, not by time.
    pub fn append_sale_at(
        &mut self,
        buyer: &str,
        seat: &str,
        timestamp: u64,
    ) -> Result<&Block, LedgerError> {
        if buyer.is_empty() {
            return Err(LedgerError::InvalidInput("buyer name must not be empty"));
        }
        if seat.is_empty() {
            return Err(LedgerError::InvalidInput("seat number must not be empty"));
        }

        let payload = Payload::Sale(SalePayload {
            event: self.config.event.clone(),
            buyer: buyer.to_string(),
            seat: seat.to_string(),
        });
        let previous_hash = self.latest().hash.clone();
        let block = Block::new(self.chain.len() as u64, timestamp, payload, previous_hash);

        tracing::debug!(index = block.index, hash = %block.hash, "recorded ticket sale");
        self.chain.push(block);
        Ok(self.latest())
    }

    /// Returns `true` if every block's stored hash matches its fields and
    /// every link matches its predecessor's hash.
    pub fn is_valid(&self) -> bool {
        validation::is_chain_valid(&self.chain)
    }

    /// Returns the first failing block, or `None` if the chain verifies.
    pub fn first_invalid(&self) -> Option<ChainFault> {
        validation::first_invalid(&self.chain)
    }

    /// Produces read-only records for every block, in chain order.
    pub fn export_records(&self) -> Vec<DisplayRecord> {
        self.chain.iter().map(DisplayRecord::from_block).collect()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the current wall-clock time as seconds since Unix epoch.
fn unix_time_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_secs()
}
