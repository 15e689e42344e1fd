//! Common error types for the persons service

use thiserror::Error;

/// Common result type for persons operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the domain, import, and persistence layers
#[derive(Error, Debug)]
pub enum Error {
    /// Colour string is blank or not one of the seven allowed values
    #[error("Invalid colour '{0}'")]
    InvalidColour(String),

    /// Colour code outside the fixed 1-7 mapping
    #[error("Unsupported colour code {0}")]
    UnsupportedColourCode(i64),

    /// Person identifier is zero or negative
    #[error("Person identifier must be greater than 0, got {0}")]
    InvalidIdentifier(i64),

    /// Reconstructed record has the wrong field count or an unparsable field
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Input ended with an incomplete record still buffered
    #[error("Incomplete record at end of input: '{0}'")]
    TruncatedInput(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Create collision on an already-stored identifier
    #[error("Person with identifier {0} already exists")]
    DuplicateIdentifier(i64),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Database operation error (wraps sqlx::Error)
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
