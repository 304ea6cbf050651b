//! Integration tests for value validation, records and the address book.

mod common;

use common::sample_record;
use contact_book::{
    AddressBook, Birthday, BookError, ContactRepository, PhoneNumber, ValidationError,
};

#[test]
fn test_phone_rejects_everything_but_ten_digits() {
    let invalid = [
        "",
        "1",
        "123456789",
        "12345678901",
        "123456789a",
        "12345 7890",
        "(123)45678",
        "+380501234",
        "١٢٣٤٥٦٧٨٩٠",
    ];
    for raw in invalid {
        assert_eq!(
            PhoneNumber::new(raw),
            Err(ValidationError::InvalidPhone(raw.to_string())),
            "{:?} should be rejected",
            raw
        );
    }
}

#[test]
fn test_phone_accepts_ten_digits_and_keeps_text() {
    for raw in ["0000000000", "1234567890", "0501234567", "9999999999"] {
        let phone = PhoneNumber::new(raw).unwrap();
        assert_eq!(phone.as_str(), raw);
        assert_eq!(phone.to_string(), raw);
    }
}

#[test]
fn test_birthday_rejects_bad_text_and_impossible_dates() {
    for raw in [
        "31.02.2000",
        "30.02.2024",
        "32.01.2000",
        "01.13.2000",
        "1.01.2000",
        "01.1.2000",
        "01.01.00",
        "2000.01.01",
        "01-01-2000",
        "today",
    ] {
        assert!(
            matches!(Birthday::new(raw), Err(ValidationError::InvalidDate(_))),
            "{:?} should be rejected",
            raw
        );
    }
}

#[test]
fn test_duplicate_phone_leaves_record_unchanged() {
    let mut record = sample_record("Ann", &["1234567890"], None);

    let result = record.add_phone("1234567890");
    assert_eq!(
        result.unwrap_err(),
        BookError::DuplicatePhone("1234567890".to_string())
    );
    assert_eq!(record.phones().len(), 1);
}

#[test]
fn test_find_and_delete_by_name() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Ann", &["1234567890"], None));

    let found = book.find("Ann").expect("Ann should be stored");
    assert_eq!(found.name().as_str(), "Ann");

    book.delete("Ann");
    assert!(book.find("Ann").is_none());

    // Deleting again is not an error
    assert!(book.delete("Ann").is_none());
}

#[test]
fn test_add_record_overwrites_existing_name() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Ann", &["1234567890"], Some("01.01.1990")));
    book.add_record(sample_record("Ann", &["0987654321"], None));

    let ann = book.find("Ann").unwrap();
    assert_eq!(ann.phones().len(), 1);
    assert_eq!(ann.phones()[0].as_str(), "0987654321");
    assert!(ann.birthday().is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_describe_is_stable() {
    let record = sample_record("Ann", &["1234567890", "0987654321"], Some("05.04.1999"));
    let first = record.describe();
    let second = record.describe();

    assert_eq!(first, second);
    assert_eq!(
        first,
        "Contact name: Ann, phones: 1234567890; 0987654321, birthday: 05.04.1999"
    );
}
