//! Unified error types for the ledger registrar.
//!
//! Every fallible operation in the crate returns [`Result`]. Variants carry the
//! values that caused the failure so callers can render a precise message, and
//! [`Error::kind`] folds them into the coarse categories the response envelope
//! reports to the UI.

use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Error type for all registrar, lookup and configuration operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was absent or blank in the submitted entry.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Request-side name of the missing field
        field: &'static str,
    },

    /// The book type is not one of the values allowed for this entry kind.
    #[error("Invalid book type '{book_type}' for {kind}")]
    InvalidBookType {
        /// Entry kind label, e.g. `receipt`
        kind: &'static str,
        /// The rejected value
        book_type: String,
    },

    /// The transaction id does not match `PREFIX-XXXXX`.
    #[error("Invalid transaction id '{transaction_id}': expected {prefix}- followed by 5 characters A-Z or 0-9")]
    InvalidTransactionId {
        /// The rejected value
        transaction_id: String,
        /// Prefix required for this entry kind
        prefix: &'static str,
    },

    /// Amount is negative, NaN or infinite.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Sequence number is zero or negative.
    #[error("Invalid sequence number: {value} (must be 1 or greater)")]
    InvalidSequenceNumber {
        /// The rejected value
        value: i64,
    },

    /// Another row of this kind already uses the transaction id.
    #[error("Transaction id {transaction_id} already exists")]
    DuplicateTransactionId {
        /// The conflicting transaction id
        transaction_id: String,
    },

    /// Another row already holds this sequence number in the same scope and book.
    #[error(
        "{kind} number {sequence_number} already exists for owner {owner_scope} in the {book_type} book"
    )]
    DuplicateSequenceNumber {
        /// Entry kind label
        kind: &'static str,
        /// Owning pastorate, church or custom book
        owner_scope: i64,
        /// Sub-ledger
        book_type: String,
        /// The conflicting number
        sequence_number: i64,
    },

    /// No row with this id exists (for update, within the given owner scope).
    #[error("{kind} {id} not found")]
    NotFound {
        /// Entry kind label
        kind: &'static str,
        /// Row id that was looked up
        id: i64,
    },

    /// Transaction id generation hit its retry cap without finding a free id.
    #[error("Could not find a free {prefix} transaction id after {attempts} attempts")]
    IdSpaceExhausted {
        /// Prefix being generated
        prefix: &'static str,
        /// Number of candidates tried
        attempts: u32,
    },

    /// The highest number in a scope is `i64::MAX`, so there is no next one.
    #[error("No {kind} number after {last} for owner {owner_scope} in the {book_type} book")]
    SequenceExhausted {
        /// Entry kind label
        kind: &'static str,
        /// Owner scope id
        owner_scope: i64,
        /// Book type
        book_type: String,
        /// Highest number in use
        last: i64,
    },

    /// Underlying store failure, propagated with its own message.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// File system failure outside the database.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON payload.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse failure category reported in the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input rejected before touching the store
    Validation,
    /// A uniqueness rule was violated
    Conflict,
    /// The referenced row does not exist
    NotFound,
    /// Id generation gave up after its retry cap
    Exhausted,
    /// Store, file system or serialization failure
    Storage,
    /// Bad configuration
    Config,
}

impl Error {
    /// Classifies this error for the response envelope.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. }
            | Self::InvalidBookType { .. }
            | Self::InvalidTransactionId { .. }
            | Self::InvalidAmount { .. }
            | Self::InvalidSequenceNumber { .. }
            | Self::Json(_) => ErrorKind::Validation,
            Self::DuplicateTransactionId { .. } | Self::DuplicateSequenceNumber { .. } => {
                ErrorKind::Conflict
            }
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::IdSpaceExhausted { .. } | Self::SequenceExhausted { .. } => {
                ErrorKind::Exhausted
            }
            Self::Database(_) | Self::Io(_) => ErrorKind::Storage,
            Self::Config { .. } => ErrorKind::Config,
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
