//! Month aggregation: totals shown by `list` and the `months` grid.

use crate::models::entry::Entry;
use crate::models::month::Month;
use crate::models::month_summary::MonthSummary;

pub struct Core;

impl Core {
    pub fn build_month_summary(month: Month, entries: &[Entry]) -> MonthSummary {
        let total_hours = entries.iter().map(|e| e.hours_worked).sum();
        let total_wage = entries.iter().map(|e| e.daily_wage).sum();

        MonthSummary {
            month,
            entry_count: entries.len(),
            total_hours,
            total_wage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn entry(hours: f64, wage: f64) -> Entry {
        Entry::new(
            "a@b.c",
            Month::March,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            t("09:00"),
            t("17:00"),
            0,
            20.0,
            false,
            15,
            t("20:00"),
            t("06:00"),
            hours,
            wage,
        )
    }

    #[test]
    fn totals_sum_derived_fields() {
        let entries = vec![entry(7.0, 140.0), entry(4.5, 99.5)];
        let s = Core::build_month_summary(Month::March, &entries);

        assert_eq!(s.entry_count, 2);
        assert!((s.total_hours - 11.5).abs() < 1e-9);
        assert!((s.total_wage - 239.5).abs() < 1e-9);
    }

    #[test]
    fn empty_month_is_zero() {
        let s = Core::build_month_summary(Month::July, &[]);
        assert_eq!(s.entry_count, 0);
        assert_eq!(s.total_hours, 0.0);
        assert_eq!(s.total_wage, 0.0);
    }
}
