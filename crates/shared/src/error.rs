//! Storage-boundary error type.

use thiserror::Error;

/// Result type alias using `StoreError`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised at the storage boundary.
///
/// These are fatal from the engine's point of view: the engine never retries
/// them itself, it propagates them to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store cannot be reached or its lock is poisoned.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Returns the error code for structured reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "STORAGE_UNAVAILABLE",
        }
    }
}
