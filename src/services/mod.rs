//! Application service layer.
//!
//! Services hold the business logic between the command interpreter and the
//! address book: the contact operations and the upcoming birthday scan.

mod birthday_service;
mod contact_service;

pub use birthday_service::{upcoming_birthdays, Clock, FixedClock, SystemClock};
pub use contact_service::{AddOutcome, ContactService};
