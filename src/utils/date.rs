use crate::models::month::Month;
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn current_year() -> i32 {
    today().year()
}

/// Build the calendar date of an entry from the wizard's pieces.
/// Returns None for days that do not exist in the given month/year
/// (e.g. February 30th).
pub fn entry_date(year: i32, month: Month, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.number(), day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nonexistent_calendar_days() {
        assert!(entry_date(2025, Month::February, 30).is_none());
        assert!(entry_date(2024, Month::February, 29).is_some());
    }
}
