//! Store error definitions

use thiserror::Error;

/// Store error types
///
/// Represents the faults that can occur while building records or driving
/// the interactive menu. A query without any match is not an error, see
/// [`crate::types::Lookup`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Last name too long or containing non printable characters
    #[error("Invalid last name: {0:?}")]
    InvalidLastName(String),
    /// First name too long or containing non printable characters
    #[error("Invalid first name: {0:?}")]
    InvalidFirstName(String),
    /// Telephone not made of exactly 8 decimal digits
    #[error("Invalid telephone: {0:?}")]
    InvalidTelephone(String),
    /// I/O error while reading queries or writing results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Error rendering results as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
