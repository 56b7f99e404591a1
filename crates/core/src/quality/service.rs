//! Quality check execution.

use tracing::warn;

use crate::directory::ChartOfAccounts;
use crate::ledger::LedgerStore;
use crate::period::SummaryStore;

use super::finding::{QualityFinding, QualityReport};

/// Runs every quality check and collects findings.
pub struct QualityService;

impl QualityService {
    /// Runs all checks; never short-circuits.
    #[must_use]
    pub fn run(
        chart: &ChartOfAccounts,
        ledger: &LedgerStore,
        summaries: &SummaryStore,
    ) -> QualityReport {
        let mut findings = Vec::new();
        Self::check_transaction_balance(ledger, &mut findings);
        Self::check_summary_drift(ledger, summaries, &mut findings);
        Self::check_account_references(chart, ledger, &mut findings);
        Self::check_line_counts(ledger, &mut findings);

        let report = QualityReport { findings };
        if !report.is_clean() {
            warn!(
                errors = report.error_count(),
                total = report.findings.len(),
                "quality checks found issues"
            );
        }
        report
    }

    /// Flags transactions whose debits and credits differ.
    fn check_transaction_balance(ledger: &LedgerStore, findings: &mut Vec<QualityFinding>) {
        for transaction in ledger.iter() {
            let total_debits = transaction.total_debits();
            let total_credits = transaction.total_credits();
            if total_debits != total_credits {
                findings.push(QualityFinding::UnbalancedTransaction {
                    reference: transaction.reference.clone(),
                    total_debits,
                    total_credits,
                });
            }
        }
    }

    /// Cross-checks transaction totals against summary totals.
    ///
    /// Skipped while no period has been aggregated; there is nothing to
    /// cross-check until the first posting run.
    fn check_summary_drift(
        ledger: &LedgerStore,
        summaries: &SummaryStore,
        findings: &mut Vec<QualityFinding>,
    ) {
        if summaries.is_empty() {
            return;
        }
        let (transaction_debits, transaction_credits) = ledger.totals();
        let (summary_debits, summary_credits) = summaries.totals();
        if transaction_debits != summary_debits || transaction_credits != summary_credits {
            findings.push(QualityFinding::SummaryDrift {
                transaction_debits,
                transaction_credits,
                summary_debits,
                summary_credits,
            });
        }
    }

    /// Flags lines posting to accounts missing from the directory.
    fn check_account_references(
        chart: &ChartOfAccounts,
        ledger: &LedgerStore,
        findings: &mut Vec<QualityFinding>,
    ) {
        for transaction in ledger.iter() {
            for line in &transaction.lines {
                if !chart.contains(&line.account) {
                    findings.push(QualityFinding::UnknownAccount {
                        reference: transaction.reference.clone(),
                        account: line.account.clone(),
                    });
                }
            }
        }
    }

    /// Advisory: flags transactions departing from the two-line convention.
    fn check_line_counts(ledger: &LedgerStore, findings: &mut Vec<QualityFinding>) {
        for transaction in ledger.iter() {
            if transaction.lines.len() != 2 {
                findings.push(QualityFinding::UnusualLineCount {
                    reference: transaction.reference.clone(),
                    lines: transaction.lines.len(),
                });
            }
        }
    }
}
