//! Shared fixtures for integration tests.

use chrono::NaiveDate;
use contact_book::{AddressBook, ContactName, ContactService, FixedClock, Record};

/// Build a date from day, month and year.
#[allow(dead_code)]
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// 10.03.2024, a Sunday.
#[allow(dead_code)]
pub fn sunday_10_march_2024() -> NaiveDate {
    date(10, 3, 2024)
}

/// A record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(ContactName::new(name).expect("valid test name"));
    for phone in phones {
        record.add_phone(phone).expect("valid test phone");
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).expect("valid test birthday");
    }
    record
}

/// A service over an empty book whose clock is pinned to `today`.
#[allow(dead_code)]
pub fn service_on(today: NaiveDate) -> ContactService<AddressBook, FixedClock> {
    ContactService::new(AddressBook::new(), FixedClock(today), 7)
}
