//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display.
//! All functions here produce `String`s; the shell decides where they go.

use crate::models::Record;
use crate::services::BalanceSummary;

/// Format the balance report
pub fn format_balance(summary: &BalanceSummary) -> String {
    format!(
        "Balance: {}\nIncome: {}\nExpenses: {}\n",
        summary.balance, summary.total_income, summary.total_expense
    )
}

/// Format a single record in its line form
pub fn format_record_row(record: &Record) -> String {
    record.to_string()
}

/// Format the full numbered listing of the ledger
///
/// Indices shown are the positions used by the edit and delete operations.
pub fn format_listing(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records.\n".to_string();
    }

    let mut output = String::from("All records:\n");
    for (index, record) in records.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index, format_record_row(record)));
    }
    output
}

/// Format the result of a search
pub fn format_search_results(matches: &[&Record]) -> String {
    if matches.is_empty() {
        return "No matching records found.\n".to_string();
    }

    let mut output = String::from("Matching records:\n");
    for record in matches {
        output.push_str(&format_record_row(record));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("2024-01-01", "Income", 1000.0, "Salary"),
            Record::new("2024-01-02", "Expense", 200.0, "Groceries"),
        ]
    }

    #[test]
    fn test_format_balance() {
        let summary = BalanceSummary {
            balance: 800.0,
            total_income: 1000.0,
            total_expense: 200.0,
        };
        assert_eq!(
            format_balance(&summary),
            "Balance: 800\nIncome: 1000\nExpenses: 200\n"
        );
    }

    #[test]
    fn test_format_listing_numbers_records() {
        let listing = format_listing(&sample_records());
        assert!(listing.contains("0. 2024-01-01, Income, 1000, Salary"));
        assert!(listing.contains("1. 2024-01-02, Expense, 200, Groceries"));
    }

    #[test]
    fn test_format_listing_empty() {
        assert_eq!(format_listing(&[]), "No records.\n");
    }

    #[test]
    fn test_format_search_results() {
        let records = sample_records();
        let matches: Vec<&Record> = records.iter().collect();
        let output = format_search_results(&matches);
        assert!(output.starts_with("Matching records:\n"));
        assert!(output.contains("2024-01-02, Expense, 200, Groceries"));
    }

    #[test]
    fn test_format_search_results_empty() {
        assert_eq!(format_search_results(&[]), "No matching records found.\n");
    }
}
