//! The audit log store.

use chrono::{DateTime, Utc};
use closebooks_shared::types::AuditEntryId;
use tracing::debug;

use super::entry::{AuditEntry, AuditEvent};

/// Append-only store of audit entries.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry with no value snapshots.
    pub fn record(
        &mut self,
        event: AuditEvent,
        table: impl Into<String>,
        record_id: Option<String>,
        description: impl Into<String>,
        actor: &str,
        at: DateTime<Utc>,
    ) {
        self.record_with_values(event, table, record_id, None, None, description, actor, at);
    }

    /// Appends an entry carrying before/after JSON snapshots.
    #[allow(clippy::too_many_arguments)]
    pub fn record_with_values(
        &mut self,
        event: AuditEvent,
        table: impl Into<String>,
        record_id: Option<String>,
        old_value: Option<String>,
        new_value: Option<String>,
        description: impl Into<String>,
        actor: &str,
        at: DateTime<Utc>,
    ) {
        let entry = AuditEntry {
            id: AuditEntryId::new(),
            at,
            event,
            table: table.into(),
            record_id,
            old_value,
            new_value,
            description: description.into(),
            actor: actor.to_string(),
        };
        debug!(event = event.as_str(), table = %entry.table, "audit entry recorded");
        self.entries.push(entry);
    }

    /// Returns up to `limit` entries, most recent first.
    ///
    /// With `since`, only entries at or after that instant are considered.
    /// The result is a finite snapshot and can be re-iterated freely.
    #[must_use]
    pub fn trail(&self, limit: usize, since: Option<DateTime<Utc>>) -> Vec<AuditEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| since.is_none_or(|s| e.at >= s))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
