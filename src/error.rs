//! Custom error types for FinLight
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::CategoryParseError;

/// The main error type for FinLight operations
#[derive(Error, Debug)]
pub enum FinlightError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected mutation requests (negative amounts, bad dates, unknown categories)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinlightError {
    /// Create a validation error for a negative amount
    pub fn negative_amount(field: &str) -> Self {
        Self::Validation(format!("{} cannot be negative", field))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for FinlightError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<CategoryParseError> for FinlightError {
    fn from(err: CategoryParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for FinlightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FinLight operations
pub type FinlightResult<T> = Result<T, FinlightError>;
