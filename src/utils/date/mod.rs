// Date utility functions

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - (first_day_of_week % 7) as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// Current wall-clock time in the shop's timezone (local time when unset).
pub fn now_in(timezone: Option<Tz>) -> NaiveDateTime {
    match timezone {
        Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
        None => Local::now().naive_local(),
    }
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}
