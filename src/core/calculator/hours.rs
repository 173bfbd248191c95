//! Worked-hours computation, independent from the wage walk.

use chrono::{Duration, NaiveDate, NaiveTime};

/// Elapsed minutes between start and end (end may roll past midnight),
/// minus the break. Clamped at zero; the wizard rejects non-positive
/// durations before an entry is ever saved.
pub fn worked_minutes(start: NaiveTime, end: NaiveTime, break_minutes: i32) -> i64 {
    let day0 = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();

    let s = day0.and_time(start);
    let mut e = day0.and_time(end);
    if e < s {
        e += Duration::days(1);
    }

    let minutes = (e - s).num_minutes() - break_minutes as i64;
    minutes.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn plain_day_shift() {
        assert_eq!(worked_minutes(t("09:00"), t("17:00"), 60), 420);
    }

    #[test]
    fn end_rolls_past_midnight() {
        assert_eq!(worked_minutes(t("22:00"), t("04:00"), 0), 360);
    }

    #[test]
    fn break_longer_than_shift_clamps_to_zero() {
        assert_eq!(worked_minutes(t("09:00"), t("09:30"), 60), 0);
    }
}
