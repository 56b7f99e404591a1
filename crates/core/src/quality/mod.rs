//! Data quality checks.
//!
//! Read-only invariant checks over the transaction store and period
//! summaries. Findings are data, not errors: every check runs to completion
//! and the full set of findings comes back in one report.

pub mod finding;
pub mod service;

pub use finding::{QualityFinding, QualityReport, Severity};
pub use service::QualityService;
