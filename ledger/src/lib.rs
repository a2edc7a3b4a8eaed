//! Ticket ledger library crate.
//!
//! This crate provides a minimal append-only, hash-linked ledger for
//! ticket-sale events:
//!
//! - strongly-typed hashes, blocks, and payloads (`types`),
//! - the append-only ledger itself (`ledger`),
//! - chain-integrity verification (`validation`),
//! - read-only export records for a display layer (`export`),
//! - boundary errors (`error`),
//! - and ledger configuration (`config`).
//!
//! The ledger is a single-writer in-memory structure. Its one guarantee is
//! that any retroactive edit to a recorded block is detectable by
//! recomputing hashes forward from that point; it does not repair
//! tampering, persist across restarts, or coordinate peers.

pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod types;
pub mod validation;

// Re-export ledger configuration and the boundary error.
pub use config::LedgerConfig;
pub use error::LedgerError;

// Re-export the ledger and its display projection.
pub use export::DisplayRecord;
pub use ledger::Ledger;

// Re-export verification results.
pub use validation::{ChainFault, FaultKind, first_invalid, is_chain_valid};

// Re-export domain types at the crate root for convenience.
pub use types::*;
