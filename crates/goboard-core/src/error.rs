//! Ledger error types.

use thiserror::Error;

/// Top-level ledger error type.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The request was malformed or is missing a required field.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The referenced game does not exist.
    #[error("game not found: {0}")]
    GameNotFound(i64),

    /// The underlying store failed.
    #[error("storage error: {0}")]
    Storage(String),
}
