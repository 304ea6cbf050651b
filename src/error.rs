//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Phone number is not exactly 10 decimal digits
    #[error("Phone number must be exactly 10 digits, got: {0}")]
    InvalidPhoneFormat(String),

    /// Date does not match `DD.MM.YYYY` or is not a real date
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat(String),

    /// Contact name is empty
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// Phone number is already stored on the record
    #[error("Phone {0} is already in the list")]
    DuplicatePhone(String),

    /// No contact is stored under the given name
    #[error("Cannot find contact with the name: {0}")]
    ContactNotFound(String),
}

impl From<ValidationError> for BookError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => Self::EmptyName,
            ValidationError::InvalidPhone(phone) => Self::InvalidPhoneFormat(phone),
            ValidationError::InvalidDate(date) => Self::InvalidDateFormat(date),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised while interpreting a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given fewer arguments than it needs
    #[error("Incorrect input.")]
    MissingArguments { command: String, expected: usize },

    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
