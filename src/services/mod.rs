//! Business logic layer for wallet-cli
//!
//! Contains the ledger operations: balance computation, add, edit, delete,
//! and free-text search over the in-memory record sequence.

pub mod ledger;

pub use ledger::{BalanceSummary, Ledger, RecordUpdate};
