//! Upcoming birthday scan.
//!
//! Finds contacts whose next birthday falls within a window of days from
//! "today" and moves weekend congratulations to the following Monday.

use crate::domain::Birthday;
use crate::models::BirthdayReminder;
use crate::repositories::ContactRepository;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

/// Source of the current date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The current-or-next occurrence of a birthday relative to `today`.
fn next_anniversary(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.anniversary_in(today.year())?;
    if this_year < today {
        birthday.anniversary_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move Saturday and Sunday to the following Monday.
fn congratulation_date(anniversary: NaiveDate) -> Option<NaiveDate> {
    match anniversary.weekday() {
        Weekday::Sat => anniversary.checked_add_days(Days::new(2)),
        Weekday::Sun => anniversary.checked_add_days(Days::new(1)),
        _ => Some(anniversary),
    }
}

/// Collect birthday reminders due within `window_days` of `today`.
///
/// Records without a birthday are skipped. The window is measured to the
/// anniversary itself, before any weekend shift, so a weekend birthday on
/// the last day of the window yields a Monday just past it.
///
/// Reminders are ordered by congratulation date; records sharing a date keep
/// the book's insertion order.
pub fn upcoming_birthdays<R>(book: &R, today: NaiveDate, window_days: u32) -> Vec<BirthdayReminder>
where
    R: ContactRepository + ?Sized,
{
    let mut reminders: Vec<BirthdayReminder> = book
        .records()
        .filter_map(|record| {
            let anniversary = next_anniversary(record.birthday()?, today)?;
            let days_until = (anniversary - today).num_days();
            if days_until > i64::from(window_days) {
                return None;
            }
            let date = congratulation_date(anniversary)?;
            Some(BirthdayReminder::new(record.name().clone(), date))
        })
        .collect();

    reminders.sort_by_key(|reminder| reminder.congratulation_date);
    reminders
}
