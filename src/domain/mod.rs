//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a contact is made
//! of: its name, phone numbers and birthday. Each value object validates at
//! construction time, so an invalid value can never be stored on a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
