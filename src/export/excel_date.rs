use chrono::{NaiveDate, NaiveTime, Timelike};

/// Try to interpret a cell string as a date or a time, returning the
/// Excel serial value plus its number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let serial = naive_date_to_excel_serial(&d);
        return Some(("yyyy-mm-dd", serial));
    }

    let time_formats = ["%H:%M:%S", "%H:%M"];

    for fmt in time_formats.iter() {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            let seconds = t.num_seconds_from_midnight() as f64;
            return Some(("hh:mm", seconds / 86400.0));
        }
    }

    None
}

fn naive_date_to_excel_serial(d: &NaiveDate) -> f64 {
    // Excel's day zero
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (*d - excel_epoch).num_days() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_dates_and_times() {
        assert!(parse_to_excel_date("2025-03-10").is_some());
        assert!(parse_to_excel_date("09:30").is_some());
        assert!(parse_to_excel_date("not a date").is_none());
    }
}
