//! Per-period general-ledger aggregation.
//!
//! Summary rows are a materialized view over the transaction store, keyed by
//! (account, period). They are always recomputed wholesale for a period -
//! "compute and replace", never "increment" - which makes re-runs idempotent.

pub mod aggregator;
pub mod summary;

#[cfg(test)]
mod aggregator_props;

pub use aggregator::{PeriodPosting, aggregate};
pub use summary::{PeriodSummary, SummaryStore};
