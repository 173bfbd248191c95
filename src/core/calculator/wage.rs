//! Daily wage calculation.
//!
//! The shift is walked minute by minute so the night-shift premium can be
//! applied to exactly the minutes overlapping the night window. The window
//! end is always anchored to the day after the window start, which makes
//! wraparound windows (e.g. 20:00-06:00) a single comparison range.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// All inputs the calculator needs. Validation (positive worked duration,
/// parseable times) happens before this struct is built, never here.
#[derive(Debug, Clone)]
pub struct WageInput {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub break_minutes: i32,
    pub wage: f64,
    pub public_holiday: bool,
    pub night_shift_increase: i32,
    pub night_shift_start: NaiveTime,
    pub night_shift_end: NaiveTime,
}

fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

/// Accumulate the wage for one shift, minute by minute.
///
/// Each minute earns `wage/60`; minutes overlapping the night window earn
/// an extra `(wage/60) * (increase/100)`. The break's wage-equivalent
/// (base rate only) is subtracted once after the walk, so night premium
/// earned during a break inside the window is kept. A set holiday flag
/// doubles the final total.
pub fn calculate_daily_wage(input: &WageInput) -> f64 {
    let day0 = anchor_date();
    let day1 = day0.succ_opt().unwrap();

    let start = day0.and_time(input.start);
    let mut end = day0.and_time(input.end);
    if end < start {
        // end rolls past midnight
        end += Duration::days(1);
    }

    let night_start = day0.and_time(input.night_shift_start);
    let night_end = day1.and_time(input.night_shift_end);

    let per_minute = input.wage / 60.0;
    let premium = per_minute * (input.night_shift_increase as f64 / 100.0);

    let mut total = 0.0;
    let mut current = start;

    while current < end {
        let next = current + Duration::minutes(1);

        if overlaps_night(current, next, night_start, night_end) {
            total += per_minute + premium;
        } else {
            total += per_minute;
        }

        current = next;
    }

    // Break wage-equivalent: hourly wage × break hours, subtracted once.
    total -= per_minute * input.break_minutes as f64;

    if input.public_holiday {
        total *= 2.0;
    }

    total
}

/// A minute [current, next) counts as night when either endpoint falls
/// inside the window.
fn overlaps_night(
    current: NaiveDateTime,
    next: NaiveDateTime,
    night_start: NaiveDateTime,
    night_end: NaiveDateTime,
) -> bool {
    (current >= night_start && current < night_end)
        || (next > night_start && next <= night_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn base_input() -> WageInput {
        WageInput {
            start: t("09:00"),
            end: t("17:00"),
            break_minutes: 60,
            wage: 20.0,
            public_holiday: false,
            night_shift_increase: 15,
            night_shift_start: t("20:00"),
            night_shift_end: t("06:00"),
        }
    }

    #[test]
    fn day_shift_without_premiums() {
        // 09:00-17:00, break 60, wage 20 → 7 worked hours → 140.00
        let wage = calculate_daily_wage(&base_input());
        assert_eq!(format!("{:.2}", wage), "140.00");
    }

    #[test]
    fn holiday_doubles_the_total() {
        let plain = calculate_daily_wage(&base_input());

        let mut holiday = base_input();
        holiday.public_holiday = true;

        assert!((calculate_daily_wage(&holiday) - 2.0 * plain).abs() < 1e-9);
    }

    #[test]
    fn shift_fully_inside_night_window() {
        // 22:00-04:00 lies entirely in 20:00-06:00:
        // 6h × 10 × 1.5 = 90 before break subtraction
        let input = WageInput {
            start: t("22:00"),
            end: t("04:00"),
            break_minutes: 0,
            wage: 10.0,
            public_holiday: false,
            night_shift_increase: 50,
            night_shift_start: t("20:00"),
            night_shift_end: t("06:00"),
        };

        let wage = calculate_daily_wage(&input);
        assert!((wage - 90.0).abs() < 1e-6);
    }

    #[test]
    fn partial_night_overlap() {
        // 18:00-22:00, window 20:00-06:00, wage 12, increase 25:
        // 4h base = 48, premium on 2h = 2 × 12 × 0.25 = 6 → 54
        let input = WageInput {
            start: t("18:00"),
            end: t("22:00"),
            break_minutes: 0,
            wage: 12.0,
            public_holiday: false,
            night_shift_increase: 25,
            night_shift_start: t("20:00"),
            night_shift_end: t("06:00"),
        };

        let wage = calculate_daily_wage(&input);
        assert!((wage - 54.0).abs() < 1e-6);
    }

    #[test]
    fn break_keeps_night_premium() {
        // Fully-night shift with a break: only the base rate of the break
        // is subtracted, the premium earned during it stays.
        let mut input = WageInput {
            start: t("22:00"),
            end: t("04:00"),
            break_minutes: 60,
            wage: 10.0,
            public_holiday: false,
            night_shift_increase: 50,
            night_shift_start: t("20:00"),
            night_shift_end: t("06:00"),
        };

        let with_break = calculate_daily_wage(&input);
        input.break_minutes = 0;
        let without_break = calculate_daily_wage(&input);

        // Subtracted exactly one hour of base wage (10.0), not 15.0.
        assert!((without_break - with_break - 10.0).abs() < 1e-6);
    }

    #[test]
    fn end_equal_to_start_earns_nothing_before_break() {
        let mut input = base_input();
        input.end = input.start;
        input.break_minutes = 0;

        assert!((calculate_daily_wage(&input)).abs() < 1e-9);
    }
}
