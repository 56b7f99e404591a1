//! Double-entry transaction store.
//!
//! This module implements the core ledger functionality:
//! - Transaction lines (debits and credits)
//! - Immutable posted transactions
//! - Balance validation (debits must equal credits, exactly)
//! - The append-only transaction store with referential-integrity checks

pub mod error;
pub mod line;
pub mod store;
pub mod transaction;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::PostError;
pub use line::{EntryType, Line};
pub use store::{AccountActivity, DateRange, LedgerStore};
pub use transaction::{Transaction, TransactionInput};
