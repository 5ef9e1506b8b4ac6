//! Audit reports over read-only entity repositories.
//!
//! The audit only ever sees the general entity view: it takes a
//! `&dyn ReadRepository<dyn Entity>`, so any variant's repository can be
//! audited once widened, and nothing here can mutate a store.

mod error;
mod report;

pub use error::{AuditError, AuditResult};
pub use report::{AuditRecord, AuditReport, AuditSummary, audit_log, describe, summarize};
