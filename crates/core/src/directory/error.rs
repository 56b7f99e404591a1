//! Directory error types.

use closebooks_shared::StoreError;
use closebooks_shared::types::AccountCode;
use thiserror::Error;

/// Errors that can occur when maintaining the chart of accounts.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// An account with this code is already registered.
    #[error("Account already registered: {0}")]
    DuplicateAccount(AccountCode),

    /// The referenced parent account does not exist.
    #[error("Unknown parent account {parent} for account {code}")]
    UnknownParent {
        /// The account being registered.
        code: AccountCode,
        /// The missing parent code.
        parent: AccountCode,
    },

    /// Registering the account would create a cycle in the hierarchy.
    #[error("Account hierarchy cycle detected at {0}")]
    HierarchyCycle(AccountCode),

    /// Storage failure.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl DirectoryError {
    /// Returns the error code for structured reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateAccount(_) => "DUPLICATE_ACCOUNT",
            Self::UnknownParent { .. } => "UNKNOWN_PARENT",
            Self::HierarchyCycle(_) => "HIERARCHY_CYCLE",
            Self::Storage(err) => err.error_code(),
        }
    }
}
