//! Ledger service
//!
//! Owns the in-memory ordered sequence of records for the current session
//! and provides the operations over it: balance, add, edit, delete, search.
//! Records are addressed by 0-based position; positions are stable only
//! until the next removal, which shifts later records left by one.

use crate::error::{WalletError, WalletResult};
use crate::models::{Record, CATEGORY_EXPENSE, CATEGORY_INCOME};

/// Totals computed over the current record sequence
///
/// Income and expense totals use exact, case-sensitive category matching;
/// records with any other category value contribute to neither sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceSummary {
    /// total_income - total_expense
    pub balance: f64,

    /// Sum of amounts where category is exactly "Income"
    pub total_income: f64,

    /// Sum of amounts where category is exactly "Expense"
    pub total_expense: f64,
}

/// A per-field optional overwrite for the edit operation
///
/// `None` keeps the prior value of that field (blank-to-keep).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordUpdate {
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
}

impl RecordUpdate {
    /// Create an empty update (keeps every field)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Replace the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replace the amount
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Replace the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check if this update changes nothing
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
    }
}

/// The in-memory ledger: the ordered record sequence for one session
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    /// Create a ledger over an already-loaded record sequence
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Get the current record sequence
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Compute the balance summary over the current sequence
    pub fn balance(&self) -> BalanceSummary {
        let total_income: f64 = self
            .records
            .iter()
            .filter(|r| r.category == CATEGORY_INCOME)
            .map(|r| r.amount)
            .sum();
        let total_expense: f64 = self
            .records
            .iter()
            .filter(|r| r.category == CATEGORY_EXPENSE)
            .map(|r| r.amount)
            .sum();

        BalanceSummary {
            balance: total_income - total_expense,
            total_income,
            total_expense,
        }
    }

    /// Append a record at the end of the sequence
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Apply a per-field update to the record at `index`
    ///
    /// Fields left `None` in the update retain their prior value. Returns
    /// the updated record. An out-of-range index leaves the sequence
    /// unchanged and fails with an invalid-index error.
    pub fn edit(&mut self, index: usize, update: RecordUpdate) -> WalletResult<&Record> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(WalletError::InvalidIndex { index, len })?;

        if let Some(date) = update.date {
            record.date = date;
        }
        if let Some(category) = update.category {
            record.category = category;
        }
        if let Some(amount) = update.amount {
            record.amount = amount;
        }
        if let Some(description) = update.description {
            record.description = description;
        }

        Ok(record)
    }

    /// Remove and return the record at `index`
    ///
    /// Later records shift left by one. An out-of-range index leaves the
    /// sequence unchanged and fails with an invalid-index error.
    pub fn remove(&mut self, index: usize) -> WalletResult<Record> {
        if index >= self.records.len() {
            return Err(WalletError::InvalidIndex {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Find records whose category, date, or amount text contains the
    /// criterion, case-insensitively
    ///
    /// A simple linear filter over the textual form of the three fields;
    /// the description is not searched.
    pub fn search(&self, criterion: &str) -> Vec<&Record> {
        let needle = criterion.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.category.to_lowercase().contains(&needle)
                    || r.date.to_lowercase().contains(&needle)
                    || r.amount.to_string().to_lowercase().contains(&needle)
            })
            .collect()
    }
}
