//! Delimited text file storage for the ledger
//!
//! Persists the ledger as one record per line, fields separated by the
//! literal `", "` in the fixed order `date, category, amount, description`,
//! UTF-8, no header, no escaping. Every save is a full overwrite of the
//! file in the ledger's current order.

pub mod file_io;

use std::path::{Path, PathBuf};

use crate::error::{WalletError, WalletResult};
use crate::models::Record;

use file_io::{read_lines, write_lines_atomic};

/// Result of loading the ledger file
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The file existed and parsed into these records
    Existing(Vec<Record>),

    /// The file does not exist yet; this is the expected first-run state,
    /// not an error. The file will be created on the first save.
    FirstRun,
}

impl LoadOutcome {
    /// Unwrap into the loaded records, empty on first run
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::Existing(records) => records,
            Self::FirstRun => Vec::new(),
        }
    }

    /// Check if this is the first-run (missing file) state
    pub fn is_first_run(&self) -> bool {
        matches!(self, Self::FirstRun)
    }
}

/// The persistence boundary between the ledger and its backing text file
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default path for the audit log, next to the ledger file
    pub fn audit_log_path(&self) -> PathBuf {
        self.path.with_extension("audit.log")
    }

    /// Load all records from the backing file
    ///
    /// A missing file yields [`LoadOutcome::FirstRun`]. Read failures and
    /// malformed lines are storage errors and propagate.
    pub fn load(&self) -> WalletResult<LoadOutcome> {
        let lines = match read_lines(&self.path)? {
            Some(lines) => lines,
            None => return Ok(LoadOutcome::FirstRun),
        };

        let mut records = Vec::with_capacity(lines.len());
        for (line_no, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let record = Record::parse_line(line).map_err(|e| {
                WalletError::Storage(format!(
                    "Malformed record at {}:{}: {}",
                    self.path.display(),
                    line_no + 1,
                    e
                ))
            })?;
            records.push(record);
        }

        Ok(LoadOutcome::Existing(records))
    }

    /// Save all records to the backing file, overwriting its contents
    ///
    /// Records are written one per line in sequence order.
    pub fn save(&self, records: &[Record]) -> WalletResult<()> {
        let lines: Vec<String> = records.iter().map(Record::to_string).collect();
        write_lines_atomic(&self.path, &lines)
    }
}
