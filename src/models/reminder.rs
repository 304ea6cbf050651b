//! Birthday reminder produced by the upcoming birthdays scan.

use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::domain::ContactName;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Serialize the congratulation date as `DD.MM.YYYY`.
fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(BIRTHDAY_FORMAT))
}

/// Who to congratulate and on which (weekend-adjusted) day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayReminder {
    /// Name of the contact
    pub name: ContactName,

    /// Day the congratulation is due, never a Saturday or Sunday
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

impl BirthdayReminder {
    pub fn new(name: ContactName, congratulation_date: NaiveDate) -> Self {
        Self {
            name,
            congratulation_date,
        }
    }

    /// The congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for BirthdayReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.formatted_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder() -> BirthdayReminder {
        BirthdayReminder::new(
            ContactName::new("Bob").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        )
    }

    #[test]
    fn test_reminder_display() {
        assert_eq!(reminder().to_string(), "Bob 05.03.2024");
    }

    #[test]
    fn test_reminder_serialization() {
        let json = serde_json::to_string(&reminder()).unwrap();
        assert_eq!(json, r#"{"name":"Bob","congratulation_date":"05.03.2024"}"#);
    }
}
