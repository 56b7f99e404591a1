//! Chart of accounts.
//!
//! The account directory is the leaf dependency of every other module: a
//! transaction line may only reference an account registered here.

pub mod account;
pub mod chart;
pub mod error;

pub use account::{Account, AccountType};
pub use chart::ChartOfAccounts;
pub use error::DirectoryError;
