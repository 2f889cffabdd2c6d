//! Audit logging for ledger mutations
//!
//! Every add, edit, and delete is recorded in an append-only audit log so
//! the history of a session can be inspected later. The ledger file itself
//! stays plain delimited text; the audit log is line-delimited JSON.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
