//! Contact Assistant - an interactive command-line address book.
//!
//! This library provides an in-memory contact directory with validated
//! phone numbers and birthdays, and an upcoming-birthday schedule with
//! a weekend-shift rule, driven by a small interactive command loop.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record aggregate
//! - **book**: The name-keyed address book
//! - **scheduler**: Upcoming-birthday computation
//! - **commands**: Command parsing and handlers
//! - **repl**: The interactive read/dispatch/print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod scheduler;

pub use book::AddressBook;
pub use commands::Command;
pub use config::Config;
pub use error::{BookError, CommandError, ConfigError};
pub use models::Record;
pub use scheduler::{upcoming_birthdays, Congratulation};
