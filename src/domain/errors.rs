//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday is not a `DD-MM-YYYY` calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name is required field"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must contain 10 digits, got: {}", phone)
            }
            Self::InvalidBirthday(raw) => {
                write!(f, "Invalid date format. Use DD-MM-YYYY, got: {}", raw)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
