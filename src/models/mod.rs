//! Core data model for wallet-cli
//!
//! This module contains the single data structure of the wallet domain:
//! the ledger record (one income or expense entry).

pub mod record;

pub use record::{Record, RecordParseError, CATEGORY_EXPENSE, CATEGORY_INCOME, FIELD_SEPARATOR};
