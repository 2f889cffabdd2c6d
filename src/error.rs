//! Custom error types for wallet-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for wallet-cli operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors (ledger file read/write/parse)
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization errors (audit log entries)
    #[error("JSON error: {0}")]
    Json(String),

    /// A record index outside the current ledger bounds
    #[error("Invalid record index: {index} (ledger has {len} records)")]
    InvalidIndex { index: usize, len: usize },

    /// User input that could not be parsed as an amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl WalletError {
    /// Create an invalid-index error for a ledger of the given length
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }

    /// Check if this is an invalid-index error
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }

    /// Check if this is an invalid-amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for wallet-cli operations
pub type WalletResult<T> = Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WalletError::Storage("test error".into());
        assert_eq!(err.to_string(), "Storage error: test error");
    }

    #[test]
    fn test_invalid_index_error() {
        let err = WalletError::invalid_index(5, 2);
        assert_eq!(
            err.to_string(),
            "Invalid record index: 5 (ledger has 2 records)"
        );
        assert!(err.is_invalid_index());
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = WalletError::InvalidAmount("abc".into());
        assert_eq!(err.to_string(), "Invalid amount: abc");
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let wallet_err: WalletError = io_err.into();
        assert!(matches!(wallet_err, WalletError::Io(_)));
    }
}
