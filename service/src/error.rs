//! Error types for the produto service
//!
//! This module defines error types for each layer:
//! - `DomainError`: Errors raised by port implementations (repositories)
//! - `AppError`: Service layer errors (validation and orchestration)

use thiserror::Error;

/// Domain layer errors - raised by repository implementations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Service layer errors
#[derive(Debug, Error)]
pub enum AppError {
    /// A required argument was not supplied
    #[error("Argument must not be null: {0}")]
    NullArgument(&'static str),

    /// A supplied entity failed field validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation targets a record that does not exist
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Repository error: {0}")]
    Domain(#[from] DomainError),
}

/// Category of an [`AppError`], independent of its message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullArgument,
    InvalidArgument,
    InvalidOperation,
    Repository,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NullArgument(_) => ErrorKind::NullArgument,
            AppError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            AppError::InvalidOperation(_) => ErrorKind::InvalidOperation,
            AppError::Domain(_) => ErrorKind::Repository,
        }
    }
}
