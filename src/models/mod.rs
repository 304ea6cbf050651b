//! Data models for the contact book.
//!
//! This module contains the contact record and the transient birthday
//! reminder produced when scanning the book.

pub mod record;
pub mod reminder;

pub use record::Record;
pub use reminder::BirthdayReminder;
