//! The interactive menu shell
//!
//! Presents the numbered menu, reads one-line selections from the input
//! stream, dispatches to the ledger operations, and persists the whole
//! ledger after every mutating choice. Generic over the input and output
//! streams so complete sessions can be scripted in tests; the binary wires
//! it to stdin/stdout.

use std::io::{BufRead, Write};

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::display;
use crate::error::{WalletError, WalletResult};
use crate::models::Record;
use crate::services::{Ledger, RecordUpdate};
use crate::storage::LedgerStore;

/// The menu loop over one ledger session
pub struct Shell<'a, R, W> {
    ledger: &'a mut Ledger,
    store: &'a LedgerStore,
    audit: &'a AuditLogger,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell over the given ledger, store, and streams
    pub fn new(
        ledger: &'a mut Ledger,
        store: &'a LedgerStore,
        audit: &'a AuditLogger,
        input: R,
        output: W,
    ) -> Self {
        Self {
            ledger,
            store,
            audit,
            input,
            output,
        }
    }

    /// Run the menu loop until the exit choice or end of input
    pub fn run(&mut self) -> WalletResult<()> {
        loop {
            self.write_menu()?;
            let choice = match self.read_input("Choose an operation: ")? {
                Some(choice) => choice,
                None => break,
            };

            match choice.as_str() {
                "1" => self.show_balance()?,
                "2" => {
                    self.add_record()?;
                    self.persist()?;
                }
                "3" => {
                    self.edit_record()?;
                    self.persist()?;
                }
                "4" => {
                    self.delete_record()?;
                    self.persist()?;
                }
                "5" => self.list_records()?,
                "6" => self.search_records()?,
                "7" => break,
                _ => self.write_line("Invalid choice. Try again.")?,
            }
        }

        Ok(())
    }

    fn write_menu(&mut self) -> WalletResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Personal Finance Wallet")?;
        writeln!(self.output, "1. Show balance")?;
        writeln!(self.output, "2. Add record")?;
        writeln!(self.output, "3. Edit record")?;
        writeln!(self.output, "4. Delete record")?;
        writeln!(self.output, "5. List all records")?;
        writeln!(self.output, "6. Search records")?;
        writeln!(self.output, "7. Exit")?;
        Ok(())
    }

    fn show_balance(&mut self) -> WalletResult<()> {
        let summary = self.ledger.balance();
        write!(self.output, "{}", display::format_balance(&summary))?;
        Ok(())
    }

    fn add_record(&mut self) -> WalletResult<()> {
        let Some(date) = self.read_input("Enter the date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let Some(category) = self.read_input("Enter the category (Income/Expense): ")? else {
            return Ok(());
        };
        let Some(amount_text) = self.read_input("Enter the amount: ")? else {
            return Ok(());
        };
        let amount: f64 = match amount_text.parse() {
            Ok(amount) => amount,
            Err(_) => {
                let err = WalletError::InvalidAmount(amount_text);
                self.write_line(&format!("{}. The record was not added.", err))?;
                return Ok(());
            }
        };
        let Some(description) = self.read_input("Enter the description: ")? else {
            return Ok(());
        };

        let record = Record::new(date, category, amount, description);
        self.record_audit(Operation::Create, &record)?;
        self.ledger.add(record);
        self.write_line("Record added.")?;
        Ok(())
    }

    fn edit_record(&mut self) -> WalletResult<()> {
        let Some(index) = self.read_index("Enter the index of the record to edit: ")? else {
            return Ok(());
        };

        let current = match self.ledger.records().get(index) {
            Some(record) => record.clone(),
            None => {
                let err = WalletError::invalid_index(index, self.ledger.len());
                self.write_line(&err.to_string())?;
                return Ok(());
            }
        };
        self.write_line(&format!("Current record: {}", current))?;

        let Some(date) = self.read_input("Enter a new date (blank to keep): ")? else {
            return Ok(());
        };
        let Some(category) = self.read_input("Enter a new category (blank to keep): ")? else {
            return Ok(());
        };
        let Some(amount_text) = self.read_input("Enter a new amount (blank to keep): ")? else {
            return Ok(());
        };
        let Some(description) = self.read_input("Enter a new description (blank to keep): ")?
        else {
            return Ok(());
        };

        // Nothing is applied until every answer is in and the amount parses,
        // so a rejected amount leaves the record untouched.
        let mut update = RecordUpdate::new();
        if !date.is_empty() {
            update = update.date(date);
        }
        if !category.is_empty() {
            update = update.category(category);
        }
        if !amount_text.is_empty() {
            match amount_text.parse::<f64>() {
                Ok(amount) => update = update.amount(amount),
                Err(_) => {
                    let err = WalletError::InvalidAmount(amount_text);
                    self.write_line(&format!("{}. The record was not changed.", err))?;
                    return Ok(());
                }
            }
        }
        if !description.is_empty() {
            update = update.description(description);
        }

        match self.ledger.edit(index, update) {
            Ok(updated) => {
                let updated = updated.clone();
                self.record_audit(Operation::Update, &updated)?;
                self.write_line("Record updated.")?;
            }
            Err(err) => self.write_line(&err.to_string())?,
        }
        Ok(())
    }

    fn delete_record(&mut self) -> WalletResult<()> {
        let Some(index) = self.read_index("Enter the index of the record to delete: ")? else {
            return Ok(());
        };

        match self.ledger.remove(index) {
            Ok(removed) => {
                self.record_audit(Operation::Delete, &removed)?;
                self.write_line(&format!("Record '{}' deleted.", removed))?;
            }
            Err(err) => self.write_line(&err.to_string())?,
        }
        Ok(())
    }

    fn list_records(&mut self) -> WalletResult<()> {
        write!(
            self.output,
            "{}",
            display::format_listing(self.ledger.records())
        )?;
        Ok(())
    }

    fn search_records(&mut self) -> WalletResult<()> {
        let Some(criterion) = self.read_input("Enter a search term (category, date, or amount): ")?
        else {
            return Ok(());
        };

        let matches = self.ledger.search(&criterion);
        write!(self.output, "{}", display::format_search_results(&matches))?;
        Ok(())
    }

    /// Save the whole ledger; failure is reported and the loop continues
    fn persist(&mut self) -> WalletResult<()> {
        if let Err(err) = self.store.save(self.ledger.records()) {
            self.write_line(&format!("Failed to save the ledger: {}", err))?;
        }
        Ok(())
    }

    /// Append an audit entry; failure is reported and the loop continues
    fn record_audit(&mut self, operation: Operation, record: &Record) -> WalletResult<()> {
        let entry = AuditEntry::new(operation, record.to_string());
        if let Err(err) = self.audit.log(&entry) {
            self.write_line(&format!("Failed to write the audit log: {}", err))?;
        }
        Ok(())
    }

    /// Prompt for a record index; a non-numeric answer is reported as an
    /// invalid index and yields `None`
    fn read_index(&mut self, prompt: &str) -> WalletResult<Option<usize>> {
        let Some(text) = self.read_input(prompt)? else {
            return Ok(None);
        };
        match text.parse() {
            Ok(index) => Ok(Some(index)),
            Err(_) => {
                self.write_line("Invalid record index.")?;
                Ok(None)
            }
        }
    }

    /// Prompt and read one trimmed line; `None` marks end of input
    fn read_input(&mut self, prompt: &str) -> WalletResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn write_line(&mut self, text: &str) -> WalletResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}
