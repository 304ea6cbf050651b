//! Contact Book - an in-memory contact directory with a birthday reminder.
//!
//! This library keeps contacts with validated phone numbers and birthdays,
//! and computes which birthdays fall in the coming week. A line-oriented
//! command interpreter drives it from the binary.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records and birthday reminders
//! - **repositories**: The name-keyed address book and its trait
//! - **services**: Contact operations and the upcoming birthday scan
//! - **cli**: Command parsing, dispatch and the read loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, CommandError, ConfigError};
pub use models::{BirthdayReminder, Record};
pub use repositories::{AddressBook, ContactRepository};
pub use services::{upcoming_birthdays, Clock, ContactService, FixedClock, SystemClock};
