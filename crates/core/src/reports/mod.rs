//! Financial report generation.
//!
//! Pure derivations over the account directory, the transaction store, and
//! the period summaries:
//! - Trial Balance (per-period or full history)
//! - Income Statement and Balance Sheet

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{
    BalanceSheet, FinancialStatements, IncomeStatement, TrialBalanceReport, TrialBalanceRow,
    TrialBalanceTotals,
};
