//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur on address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record exists under the given name
    #[error("Contact not found: {0}")]
    NotFound(String),
}

/// Errors that can occur at the command boundary.
///
/// Handlers return these instead of printing; the interactive loop
/// formats them for the user and continues.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field value failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// An address book operation failed
    #[error("{0}")]
    Book(#[from] BookError),

    /// The named contact does not exist
    #[error("Contact not found.")]
    ContactNotFound,

    /// Required positional arguments are absent
    #[error("{0}")]
    MissingArgument(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
