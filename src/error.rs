//! Error types for the address book service and server.
//!
//! Field validation failures live in [`crate::domain::ValidationError`];
//! this module wraps them for the service boundary and adds configuration errors.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by [`DirectoryService`](crate::services::DirectoryService) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A field failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The operation needs an existing contact and there is none
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The request could not be interpreted
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
