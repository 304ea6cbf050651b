//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::Serialize;
use std::fmt;

/// Text shown in place of a birthday that was never set.
pub const BIRTHDAY_NOT_SET: &str = "not set";

/// A single contact: a name, its phone numbers and an optional birthday.
///
/// Phone numbers keep insertion order and never repeat. The name is fixed
/// at creation and is the key the record is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// - `BookError::InvalidPhoneFormat` if `raw` is not 10 digits
    /// - `BookError::DuplicatePhone` if the number is already on the record;
    ///   the record is left unchanged
    pub fn add_phone(&mut self, raw: &str) -> BookResult<&PhoneNumber> {
        let phone = PhoneNumber::new(raw)?;
        if self.phones.contains(&phone) {
            return Err(BookError::DuplicatePhone(phone.into_inner()));
        }
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// Replace the first phone equal to `old_raw` with `new_raw`.
    ///
    /// Both numbers are validated before anything is looked up. A well-formed
    /// `old_raw` that is not on the record leaves it untouched and yields
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - `BookError::InvalidPhoneFormat` if either number is malformed
    /// - `BookError::DuplicatePhone` if `new_raw` is already stored under a
    ///   different slot
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> BookResult<Option<&PhoneNumber>> {
        let old = PhoneNumber::new(old_raw)?;
        let new = PhoneNumber::new(new_raw)?;

        let Some(index) = self.phones.iter().position(|p| *p == old) else {
            return Ok(None);
        };

        if old != new && self.phones.contains(&new) {
            return Err(BookError::DuplicatePhone(new.into_inner()));
        }

        self.phones[index] = new;
        Ok(Some(&self.phones[index]))
    }

    /// Look up a stored phone equal to `raw`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPhoneFormat` if `raw` is malformed.
    pub fn find_phone(&self, raw: &str) -> BookResult<Option<&PhoneNumber>> {
        let phone = PhoneNumber::new(raw)?;
        Ok(self.phones.iter().find(|p| **p == phone))
    }

    /// Remove the phone equal to `raw`, returning it if it was present.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPhoneFormat` if `raw` is malformed.
    pub fn remove_phone(&mut self, raw: &str) -> BookResult<Option<PhoneNumber>> {
        let phone = PhoneNumber::new(raw)?;
        Ok(self
            .phones
            .iter()
            .position(|p| *p == phone)
            .map(|index| self.phones.remove(index)))
    }

    /// Validate and store a birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidDateFormat` if `raw` is not a valid
    /// `DD.MM.YYYY` date; the previous birthday is kept.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<&Birthday> {
        let birthday = Birthday::new(raw)?;
        Ok(&*self.birthday.insert(birthday))
    }

    /// One-line summary used by the contact listing.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .as_ref()
            .map_or(BIRTHDAY_NOT_SET, Birthday::as_str);

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(ContactName::new(name).unwrap())
    }

    #[test]
    fn test_record_new() {
        let record = record("John");
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_keeps_insertion_order() {
        let mut record = record("John");
        record.add_phone("5555555555").unwrap();
        record.add_phone("1111111111").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(PhoneNumber::as_str).collect();
        assert_eq!(phones, vec!["5555555555", "1111111111"]);
    }

    #[test]
    fn test_add_phone_rejects_duplicate() {
        let mut record = record("John");
        record.add_phone("1234567890").unwrap();

        let err = record.add_phone("1234567890").unwrap_err();
        assert_eq!(err, BookError::DuplicatePhone("1234567890".to_string()));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = record("John");
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err, BookError::InvalidPhoneFormat("12345".to_string()));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = record("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        let edited = record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(edited.map(PhoneNumber::as_str), Some("3333333333"));
        assert_eq!(record.phones()[0].as_str(), "3333333333");
        assert_eq!(record.phones()[1].as_str(), "2222222222");
    }

    #[test]
    fn test_edit_phone_missing_old_is_noop() {
        let mut record = record("John");
        record.add_phone("1111111111").unwrap();

        let edited = record.edit_phone("9999999999", "3333333333").unwrap();
        assert!(edited.is_none());
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_edit_phone_validates_both_numbers() {
        let mut record = record("John");
        record.add_phone("1111111111").unwrap();

        // Malformed old number fails even though it could never match
        assert!(matches!(
            record.edit_phone("111", "3333333333"),
            Err(BookError::InvalidPhoneFormat(_))
        ));
        assert!(matches!(
            record.edit_phone("1111111111", "333"),
            Err(BookError::InvalidPhoneFormat(_))
        ));
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_edit_phone_rejects_duplicate_target() {
        let mut record = record("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        let err = record.edit_phone("1111111111", "2222222222").unwrap_err();
        assert_eq!(err, BookError::DuplicatePhone("2222222222".to_string()));

        // Editing a number to itself is allowed
        assert!(record.edit_phone("1111111111", "1111111111").unwrap().is_some());
    }

    #[test]
    fn test_find_phone() {
        let mut record = record("John");
        record.add_phone("1234567890").unwrap();

        assert_eq!(
            record.find_phone("1234567890").unwrap().map(PhoneNumber::as_str),
            Some("1234567890")
        );
        assert!(record.find_phone("0987654321").unwrap().is_none());
        assert!(record.find_phone("nope").is_err());
    }

    #[test]
    fn test_remove_phone() {
        let mut record = record("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();

        let removed = record.remove_phone("1234567890").unwrap();
        assert_eq!(removed.map(PhoneNumber::into_inner), Some("1234567890".to_string()));
        assert_eq!(record.phones().len(), 1);

        assert!(record.remove_phone("1234567890").unwrap().is_none());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut record = record("John");
        record.set_birthday("01.01.2000").unwrap();
        record.set_birthday("02.02.2002").unwrap();
        assert_eq!(record.birthday().map(Birthday::as_str), Some("02.02.2002"));
    }

    #[test]
    fn test_set_birthday_invalid_keeps_previous() {
        let mut record = record("John");
        record.set_birthday("01.01.2000").unwrap();

        assert!(matches!(
            record.set_birthday("31.02.2000"),
            Err(BookError::InvalidDateFormat(_))
        ));
        assert_eq!(record.birthday().map(Birthday::as_str), Some("01.01.2000"));
    }

    #[test]
    fn test_describe() {
        let mut record = record("John");
        assert_eq!(
            record.describe(),
            "Contact name: John, phones: , birthday: not set"
        );

        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.set_birthday("05.04.1999").unwrap();
        assert_eq!(
            record.describe(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: 05.04.1999"
        );
        assert_eq!(record.describe(), record.describe());
    }

    #[test]
    fn test_record_serialization() {
        let mut record = record("John");
        record.add_phone("1234567890").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"John","phones":["1234567890"]}"#);

        record.set_birthday("05.04.1999").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""birthday":"05.04.1999""#));
    }
}
