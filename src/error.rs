//! Custom error types for Baby Accounts
//!
//! This module defines the error hierarchy for the client using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Baby Accounts operations
#[derive(Error, Debug)]
pub enum AccountsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// More than one entity carries the same name
    #[error("{entity_type} name '{name}' is ambiguous ({count} matches); use the numeric id instead")]
    Ambiguous {
        entity_type: &'static str,
        name: String,
        count: usize,
    },

    /// Transport failures (connection refused, timeouts, undecodable bodies)
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The backend rejected a write, with its field errors flattened
    #[error("Rejected by server: {0}")]
    Rejected(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl AccountsError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
            || matches!(self, Self::Api { status: 404, .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Rejected(_))
    }
}

impl From<std::io::Error> for AccountsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AccountsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for AccountsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Json(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

/// Result type alias for Baby Accounts operations
pub type AccountsResult<T> = Result<T, AccountsError>;
