//! Contact service layer.
//!
//! Operations the command interpreter calls, each working on the single
//! address book owned by the service.

use super::birthday_service::{upcoming_birthdays, Clock, SystemClock};
use crate::config::DEFAULT_REMINDER_WINDOW_DAYS;
use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::models::{BirthdayReminder, Record};
use crate::repositories::{AddressBook, ContactRepository, RecordIter};

/// Whether `add_contact` created a record or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Updated,
}

/// Business operations over a contact repository.
#[derive(Debug)]
pub struct ContactService<R = AddressBook, C = SystemClock> {
    repository: R,
    clock: C,
    reminder_window_days: u32,
}

impl ContactService {
    /// Service over an empty in-memory address book and the system clock.
    pub fn in_memory() -> Self {
        Self::new(AddressBook::new(), SystemClock, DEFAULT_REMINDER_WINDOW_DAYS)
    }
}

impl<R, C> ContactService<R, C>
where
    R: ContactRepository,
    C: Clock,
{
    /// Create a new contact service.
    pub fn new(repository: R, clock: C, reminder_window_days: u32) -> Self {
        Self {
            repository,
            clock,
            reminder_window_days,
        }
    }

    /// Read access to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn record(&self, name: &str) -> BookResult<&Record> {
        self.repository
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.repository
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Add a phone to `name`, creating the contact if it does not exist.
    ///
    /// The phone is validated before a new record is created, so a failed
    /// call never leaves an empty contact behind.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<AddOutcome> {
        if let Some(record) = self.repository.find_mut(name) {
            record.add_phone(phone)?;
            tracing::debug!(contact = name, phone, "Phone added to existing contact");
            return Ok(AddOutcome::Updated);
        }

        let mut record = Record::new(ContactName::new(name)?);
        record.add_phone(phone)?;
        self.repository.add_record(record);
        tracing::debug!(contact = name, phone, "Contact created");
        Ok(AddOutcome::Added)
    }

    /// Replace `old_phone` with `new_phone` on the named contact.
    ///
    /// Returns `Ok(None)` when `old_phone` is well formed but not stored.
    pub fn change_phone(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> BookResult<Option<PhoneNumber>> {
        let record = self.record_mut(name)?;
        let edited = record.edit_phone(old_phone, new_phone)?.cloned();
        if edited.is_none() {
            tracing::debug!(contact = name, old_phone, "Phone to change not found on contact");
        }
        Ok(edited)
    }

    /// Phones stored for the named contact, in insertion order.
    pub fn phones(&self, name: &str) -> BookResult<&[PhoneNumber]> {
        Ok(self.record(name)?.phones())
    }

    /// The stored phone on the named contact equal to `phone`, if any.
    pub fn find_phone(&self, name: &str, phone: &str) -> BookResult<Option<&PhoneNumber>> {
        self.record(name)?.find_phone(phone)
    }

    /// Remove a phone from the named contact, returning it if it was stored.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<Option<PhoneNumber>> {
        let removed = self.record_mut(name)?.remove_phone(phone)?;
        if removed.is_some() {
            tracing::debug!(contact = name, phone, "Phone removed");
        }
        Ok(removed)
    }

    /// Remove the named contact, returning it if it was stored.
    ///
    /// Deleting a name that is not stored is a no-op.
    pub fn delete_contact(&mut self, name: &str) -> Option<Record> {
        let removed = self.repository.delete(name);
        if removed.is_some() {
            tracing::debug!(contact = name, "Contact deleted");
        }
        removed
    }

    /// All contacts in insertion order.
    pub fn all_contacts(&self) -> RecordIter<'_> {
        self.repository.records()
    }

    /// Set or overwrite the named contact's birthday.
    pub fn set_birthday(&mut self, name: &str, date: &str) -> BookResult<Birthday> {
        let record = self.record_mut(name)?;
        let birthday = record.set_birthday(date)?.clone();
        tracing::debug!(contact = name, date, "Birthday set");
        Ok(birthday)
    }

    /// The named contact's birthday, if one was set.
    pub fn birthday(&self, name: &str) -> BookResult<Option<&Birthday>> {
        Ok(self.record(name)?.birthday())
    }

    /// Reminders for birthdays within the configured window from today.
    pub fn upcoming_birthdays(&self) -> Vec<BirthdayReminder> {
        let today = self.clock.today();
        let reminders = upcoming_birthdays(&self.repository, today, self.reminder_window_days);
        tracing::debug!(%today, count = reminders.len(), "Upcoming birthdays scanned");
        reminders
    }
}
