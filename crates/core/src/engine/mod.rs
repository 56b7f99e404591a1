//! The `GeneralLedger` facade.
//!
//! Owns every store behind a single lock and exposes the engine's public
//! operations: directory administration, transaction posting, period
//! aggregation, reporting, reconciliation, quality checks, and the audit
//! trail. Reads see a consistent snapshot; writes are short-lived and
//! exclusive, so duplicate-reference checks cannot race and aggregation sees
//! all-or-none of any concurrent posting.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use closebooks_shared::config::EngineConfig;
use closebooks_shared::error::{StoreError, StoreResult};
use closebooks_shared::types::{AccountCode, Period, TransactionRef};
use tracing::info;

use crate::audit::{AuditEntry, AuditEvent, AuditLog};
use crate::directory::{Account, ChartOfAccounts, DirectoryError};
use crate::ledger::{
    AccountActivity, DateRange, LedgerStore, PostError, Transaction, TransactionInput,
};
use crate::period::{PeriodPosting, SummaryStore, aggregate};
use crate::quality::{QualityReport, QualityService};
use crate::recon::{
    ReconcileError, ReconciliationLog, ReconciliationRecord, ReconciliationService, StatementLine,
};
use crate::reports::{FinancialStatements, ReportService, TrialBalanceReport};


/// Everything the engine owns, guarded as one unit.
#[derive(Debug, Default)]
struct LedgerState {
    chart: ChartOfAccounts,
    ledger: LedgerStore,
    summaries: SummaryStore,
    reconciliations: ReconciliationLog,
    audit: AuditLog,
}

/// The ledger and reconciliation engine.
///
/// Construct one per ledger; the caller owns the handle and may share it
/// across threads (`&self` methods take the lock internally).
#[derive(Debug)]
pub struct GeneralLedger {
    state: RwLock<LedgerState>,
    config: EngineConfig,
}

impl Default for GeneralLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneralLedger {
    /// Creates an empty ledger with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an empty ledger with the given configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: RwLock::new(LedgerState::default()),
            config,
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, LedgerState>> {
        self.state
            .read()
            .map_err(|_| StoreError::Unavailable("ledger state lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, LedgerState>> {
        self.state
            .write()
            .map_err(|_| StoreError::Unavailable("ledger state lock poisoned".to_string()))
    }

    // --- Directory administration ---

    /// Registers an account in the chart of accounts.
    ///
    /// # Errors
    ///
    /// Rejects duplicate codes, unknown parents, and hierarchy cycles.
    pub fn register_account(&self, account: Account) -> Result<(), DirectoryError> {
        let mut state = self.write().map_err(DirectoryError::Storage)?;
        let code = account.code.clone();
        let snapshot = serde_json::to_string(&account).ok();
        state.chart.register(account)?;
        state.audit.record_with_values(
            AuditEvent::AccountRegistered,
            "accounts",
            Some(code.to_string()),
            None,
            snapshot,
            format!("Registered account {code}"),
            &self.config.audit.actor,
            Utc::now(),
        );
        info!(account = %code, "account registered");
        Ok(())
    }

    /// Returns every registered account in code order.
    ///
    /// # Errors
    ///
    /// Fails only if storage is unavailable.
    pub fn accounts(&self) -> StoreResult<Vec<Account>> {
        Ok(self.read()?.chart.iter().cloned().collect())
    }

    /// Looks up one account by code.
    ///
    /// # Errors
    ///
    /// Fails only if storage is unavailable.
    pub fn account(&self, code: &AccountCode) -> StoreResult<Option<Account>> {
        Ok(self.read()?.chart.get(code).cloned())
    }

    // --- Posting ---

    /// Validates and posts one transaction.
    ///
    /// # Errors
    ///
    /// Rejects structurally invalid, unbalanced, unresolvable, or duplicate
    /// transactions; a rejection leaves the ledger untouched.
    pub fn post_transaction(&self, input: TransactionInput) -> Result<Transaction, PostError> {
        let mut guard = self.write().map_err(PostError::Storage)?;
        let state = &mut *guard;
        let posted_at = Utc::now();
        let transaction = state
            .ledger
            .post(input, &state.chart, posted_at, &self.config.audit.actor)?
            .clone();
        state.audit.record_with_values(
            AuditEvent::TransactionPosted,
            "transactions",
            Some(transaction.reference.to_string()),
            None,
            serde_json::to_string(&transaction).ok(),
            format!("Posted transaction {}", transaction.reference),
            &self.config.audit.actor,
            posted_at,
        );
        info!(
            reference = %transaction.reference,
            debits = %transaction.total_debits(),
            "transaction posted"
        );
        Ok(transaction)
    }

    /// Posts a batch of transactions, stopping at the first rejection.
    ///
    /// Atomicity is per transaction: everything posted before the failure
    /// stays posted.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    pub fn post_all(
        &self,
        inputs: impl IntoIterator<Item = TransactionInput>,
    ) -> Result<Vec<Transaction>, PostError> {
        let mut posted = Vec::new();
        for input in inputs {
            posted.push(self.post_transaction(input)?);
        }
        Ok(posted)
    }

    /// Looks up a posted transaction by reference.
    ///
    /// # Errors
    ///
    /// Fails only if storage is unavailable.
    pub fn transaction(&self, reference: &TransactionRef) -> StoreResult<Option<Transaction>> {
        Ok(self.read()?.ledger.get(reference).cloned())
    }

    /// Returns one account's date-ordered activity.
    ///
    /// # Errors
    ///
    /// Fails only if storage is unavailable.
    pub fn account_activity(
        &self,
        account: &AccountCode,
        range: DateRange,
    ) -> StoreResult<Vec<AccountActivity>> {
        Ok(self.read()?.ledger.activity(account, range))
    }

    // --- Period aggregation ---

    /// Aggregates a fiscal period into summary rows (compute and replace).
    ///
    /// Idempotent: re-running a period replaces its rows wholesale, so
    /// consecutive runs over unchanged data produce identical results.
    ///
    /// # Errors
    ///
    /// Fails only if storage is unavailable.
    pub fn post_period(&self, period: Period) -> StoreResult<PeriodPosting> {
        let mut state = self.write()?;
        let rows = aggregate(&state.ledger, period);
        let posting = PeriodPosting::from_rows(period, &rows);
        state.summaries.replace_period(period, rows);
        state.audit.record(
            AuditEvent::PeriodPosted,
            "period_summaries",
            Some(period.to_string()),
            format!(
                "Posted period {period}: {} accounts, {} debits",
                posting.accounts, posting.total_debits
            ),
            &self.config.audit.actor,
            Utc::now(),
        );
        info!(
            period = %period,
            accounts = posting.accounts,
            debits = %posting.total_debits,
            "period posted"
        );
        Ok(posting)
    }

    // --- Reporting ---

    /// Generates a trial balance, per-period or over full history.
    ///
    /// # Errors
    ///
    /// Fails only if storage is unavailable.
    pub fn trial_balance(&self, period: Option<Period>) -> StoreResult<TrialBalanceReport> {
        let state = self.read()?;
        Ok(ReportService::trial_balance(
            &state.chart,
            &state.ledger,
            &state.summaries,
            period,
        ))
    }

    /// Generates the income statement and balance sheet over full history.
    ///
    /// # Errors
    ///
    /// Fails only if storage is unavailable.
    pub fn financial_statements(&self) -> StoreResult<FinancialStatements> {
        let state = self.read()?;
        Ok(ReportService::financial_statements(
            &state.chart,
            &state.ledger,
            self.config.reconciliation.tolerance,
        ))
    }

    // --- Reconciliation ---

    /// Reconciles an account's period activity against statement lines.
    ///
    /// Requires the period to be posted first (the book balance comes from
    /// the summary). Appends the record to the reconciliation log; re-runs
    /// append again and the newest record wins for reporting.
    ///
    /// # Errors
    ///
    /// `UnknownAccount` or `SummaryMissing` per the preconditions.
    pub fn reconcile(
        &self,
        account: &AccountCode,
        period: Period,
        statement_lines: &[StatementLine],
    ) -> Result<ReconciliationRecord, ReconcileError> {
        let mut guard = self.write().map_err(ReconcileError::Storage)?;
        let state = &mut *guard;
        let record = ReconciliationService::reconcile(
            &state.chart,
            &state.ledger,
            &state.summaries,
            account,
            period,
            statement_lines,
            self.config.reconciliation.tolerance,
            Utc::now(),
            &self.config.audit.actor,
        )?;
        state.audit.record_with_values(
            AuditEvent::ReconciliationCompleted,
            "reconciliations",
            Some(record.id.to_string()),
            None,
            serde_json::to_string(&record).ok(),
            format!(
                "Reconciled {account} for {period}: variance {}",
                record.variance
            ),
            &self.config.audit.actor,
            record.completed_at,
        );
        state.reconciliations.append(record.clone());
        Ok(record)
    }

    /// Returns the newest reconciliation record for the account and period.
    ///
    /// # Errors
    ///
    /// Fails only if storage is unavailable.
    pub fn latest_reconciliation(
        &self,
        account: &AccountCode,
        period: Period,
    ) -> StoreResult<Option<ReconciliationRecord>> {
        Ok(self.read()?.reconciliations.latest(account, period).cloned())
    }

    // --- Quality & audit ---

    /// Runs every quality check; findings are data, not errors.
    ///
    /// # Errors
    ///
    /// Fails only if storage is unavailable.
    pub fn run_quality_checks(&self) -> StoreResult<QualityReport> {
        let state = self.read()?;
        Ok(QualityService::run(
            &state.chart,
            &state.ledger,
            &state.summaries,
        ))
    }

    /// Returns up to `limit` audit entries, most recent first.
    ///
    /// # Errors
    ///
    /// Fails only if storage is unavailable.
    pub fn audit_trail(
        &self,
        limit: usize,
        since: Option<DateTime<Utc>>,
    ) -> StoreResult<Vec<AuditEntry>> {
        Ok(self.read()?.audit.trail(limit, since))
    }
}
