//! Unified error handling for the data layer.
//!
//! Not-found conditions are not errors here: repositories report them as
//! `Ok(None)` or `Ok(false)`. Everything in this enum is surfaced to the
//! caller, which owns the mapping to user-visible responses.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Whether the datastore rejected a write on a unique constraint
    /// (duplicate slug, second settings row for a user, ...).
    #[cfg(feature = "database")]
    pub fn is_unique_violation(&self) -> bool {
        match self {
            AppError::Database(e) => matches!(
                e.sql_err(),
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
            ),
            _ => false,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_conversion() {
        let err: AppError = DomainError::validation("bad status").into();
        assert!(matches!(err, AppError::Validation(ref m) if m == "bad status"));
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
