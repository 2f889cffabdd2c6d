//! Ledger record model
//!
//! Represents one income or expense entry and its textual line form used by
//! the storage layer (`date, category, amount, description`).

use std::fmt;

use thiserror::Error;

/// The literal field separator of the line form
pub const FIELD_SEPARATOR: &str = ", ";

/// Conventional category value for income entries
pub const CATEGORY_INCOME: &str = "Income";

/// Conventional category value for expense entries
pub const CATEGORY_EXPENSE: &str = "Expense";

/// Errors produced while parsing a record from its line form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordParseError {
    /// The line did not split into the expected 4 fields
    #[error("expected 4 fields separated by ', ', found {found}")]
    FieldCount { found: usize },

    /// The amount field was not a valid number
    #[error("amount is not a number: '{0}'")]
    Amount(String),
}

/// One ledger entry
///
/// A flat data holder. The date is expected in "YYYY-MM-DD" shape and the
/// category is conventionally [`CATEGORY_INCOME`] or [`CATEGORY_EXPENSE`],
/// but neither is validated; both are conventions of the file format, not
/// invariants. The description must not contain the field
/// separator or the line form will not round-trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Entry date, expected shape "YYYY-MM-DD"
    pub date: String,

    /// Entry category, conventionally "Income" or "Expense"
    pub category: String,

    /// Entry amount; sign is not tied to the category
    pub amount: f64,

    /// Free-text description
    pub description: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Parse a record from its line form
    ///
    /// Splits on the first three occurrences of `", "` so the description
    /// keeps everything after the third separator.
    pub fn parse_line(line: &str) -> Result<Self, RecordParseError> {
        let fields: Vec<&str> = line.splitn(4, FIELD_SEPARATOR).collect();
        if fields.len() != 4 {
            return Err(RecordParseError::FieldCount {
                found: fields.len(),
            });
        }

        let amount: f64 = fields[2]
            .parse()
            .map_err(|_| RecordParseError::Amount(fields[2].to_string()))?;

        Ok(Self {
            date: fields[0].to_string(),
            category: fields[1].to_string(),
            amount,
            description: fields[3].to_string(),
        })
    }

    /// Check if this record uses the income category convention
    pub fn is_income(&self) -> bool {
        self.category == CATEGORY_INCOME
    }

    /// Check if this record uses the expense category convention
    pub fn is_expense(&self) -> bool {
        self.category == CATEGORY_EXPENSE
    }
}

impl fmt::Display for Record {
    /// Render the line form: `date, category, amount, description`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.date,
            self.category,
            self.amount,
            self.description,
            sep = FIELD_SEPARATOR
        )
    }
}
