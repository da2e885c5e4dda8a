//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    #[error("empty name")]
    EmptyName,

    /// The provided phone number is not exactly ten decimal digits.
    #[error("invalid phone format")]
    InvalidPhone(String),

    /// The provided birthday text is not a calendar date.
    #[error("invalid birthday date: {0}")]
    InvalidBirthday(String),
}
