use crate::AuditResult;
use entrepo_model::{Entity, EntityHeader};
use entrepo_repository::ReadRepository;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// One audit line per entity: variant tag, identifier, timestamps, active flag.
pub type AuditRecord = EntityHeader;

/// Enumerates `repository` and emits one record per entity, in order.
pub fn audit_log(repository: &dyn ReadRepository<dyn Entity>) -> Vec<AuditRecord> {
    let records: Vec<_> = repository
        .get_all()
        .into_iter()
        .map(|entity| describe(entity))
        .collect();
    debug!("Audited {} entities", records.len());
    records
}

/// The audit record of a single entity.
pub fn describe(entity: &dyn Entity) -> AuditRecord {
    entity.header()
}

/// Counts over a set of audit records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Record count per variant tag.
    pub by_type: BTreeMap<&'static str, usize>,
}

pub fn summarize(records: &[AuditRecord]) -> AuditSummary {
    let mut summary = AuditSummary::default();
    for record in records {
        summary.total += 1;
        if record.active {
            summary.active += 1;
        } else {
            summary.inactive += 1;
        }
        *summary.by_type.entry(record.entity_type).or_default() += 1;
    }
    summary
}

/// Records plus their summary, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub records: Vec<AuditRecord>,
    pub summary: AuditSummary,
}

impl AuditReport {
    pub fn from_repository(repository: &dyn ReadRepository<dyn Entity>) -> Self {
        Self::from_records(audit_log(repository))
    }

    pub fn from_records(records: Vec<AuditRecord>) -> Self {
        let summary = summarize(&records);
        Self { records, summary }
    }

    /// Appends the records of another report and recomputes the summary.
    pub fn merge(mut self, other: Self) -> Self {
        self.records.extend(other.records);
        self.summary = summarize(&self.records);
        self
    }

    pub fn to_json(&self) -> AuditResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{record}")?;
            writeln!(f)?;
        }
        write!(
            f,
            "{} entities ({} active, {} inactive)",
            self.summary.total, self.summary.active, self.summary.inactive
        )
    }
}
