//! Ledger and reconciliation engine for Closebooks.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `directory` - Chart of accounts
//! - `ledger` - Double-entry transaction store and balance validation
//! - `period` - Per-period general-ledger aggregation
//! - `reports` - Trial balance and financial statements
//! - `recon` - Bank-statement reconciliation
//! - `quality` - Read-only invariant checks
//! - `audit` - Append-only audit log
//! - `engine` - The `GeneralLedger` facade tying the stores together

pub mod audit;
pub mod directory;
pub mod engine;
pub mod ledger;
pub mod period;
pub mod quality;
pub mod recon;
pub mod reports;

pub use engine::GeneralLedger;
