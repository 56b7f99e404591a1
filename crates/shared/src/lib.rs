//! Shared types, errors, and configuration for Closebooks.
//!
//! This crate provides common types used across all other crates:
//! - Typed string codes for accounts and transaction references
//! - Typed IDs for append-only records
//! - Fiscal period keys
//! - The storage error type
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{StoreError, StoreResult};
