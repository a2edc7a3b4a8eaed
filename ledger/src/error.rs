use std::fmt;

/// Error type returned at the ledger boundary.
///
/// Chain tampering is *not* an error: verification reports it as a normal
/// return value. The only failure here is caller input rejected before a
/// block is built.
#[derive(Debug)]
pub enum LedgerError {
    /// Caller-supplied input was rejected.
    InvalidInput(&'static str),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for LedgerError {}
