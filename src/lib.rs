//! wallet-cli - Terminal-based personal finance wallet
//!
//! This library provides the core functionality for the wallet-cli
//! application: a menu-driven console ledger that records income and
//! expense entries and persists them to a plain delimited text file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data model (the ledger record)
//! - `storage`: Delimited text file storage layer
//! - `services`: Ledger operations (balance, add, edit, delete, search)
//! - `display`: Terminal output formatting
//! - `shell`: The interactive menu loop
//! - `audit`: Append-only audit logging for mutations
//!
//! # Example
//!
//! ```rust,ignore
//! use wallet_cli::services::Ledger;
//! use wallet_cli::storage::{LedgerStore, LoadOutcome};
//!
//! let store = LedgerStore::new("transactions.txt".into());
//! let ledger = match store.load()? {
//!     LoadOutcome::Existing(records) => Ledger::new(records),
//!     LoadOutcome::FirstRun => Ledger::default(),
//! };
//! ```

pub mod audit;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::WalletError;
