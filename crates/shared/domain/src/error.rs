//! Domain-level errors.
//!
//! Raised when a value does not satisfy a business rule, independent of
//! any datastore.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}
