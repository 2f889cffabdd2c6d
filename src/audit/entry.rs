//! Audit entry data structures
//!
//! Defines the structure of audit log entries: the operation kind and the
//! entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A record was added
    Create,
    /// A record was edited
    Update,
    /// A record was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one mutation of the ledger with its timestamp and the line form
/// of the record involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the mutation happened
    pub timestamp: DateTime<Utc>,

    /// What kind of mutation it was
    pub operation: Operation,

    /// The record's line form after the mutation (before it, for deletes)
    pub record: String,
}

impl AuditEntry {
    /// Create an entry timestamped now
    pub fn new(operation: Operation, record: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            record: record.into(),
        }
    }
}
