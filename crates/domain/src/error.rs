//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID (non-numeric or out of range)
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// Parse error (for enums and value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for a rejected field value.
    ///
    /// # Example
    /// ```
    /// use roster_domain::DomainError;
    ///
    /// let err = DomainError::validation("Name is incorrect");
    /// assert_eq!(err.to_string(), "Validation failed: Name is incorrect");
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// The bare message without the category prefix, suitable for client responses.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::InvalidId(msg) | Self::Parse(msg) => msg.clone(),
        }
    }
}
