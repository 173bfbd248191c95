use super::month::Month;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// A single shift entry, owned by one user and one calendar month.
///
/// `hours_worked` and `daily_wage` are derived from the other fields at
/// save time and are never edited independently.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: i32,
    pub email: String,       // ⇔ entries.email
    pub month: Month,        // ⇔ entries.month (lowercase name)
    pub position: i32,       // ⇔ entries.position (0-based display index)
    pub date: NaiveDate,     // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub start_hour: NaiveTime, // ⇔ entries.start_hour (TEXT "HH:MM")
    pub end_hour: NaiveTime,   // ⇔ entries.end_hour (TEXT "HH:MM")
    pub break_minutes: i32,
    pub wage: f64,
    pub public_holiday: bool,
    pub night_shift_increase: i32,
    pub night_shift_start: NaiveTime,
    pub night_shift_end: NaiveTime,
    pub hours_worked: f64, // derived
    pub daily_wage: f64,   // derived
    pub created_at: String, // ISO8601
}

impl Entry {
    /// High-level constructor for entries created by the CLI.
    /// Position is recomputed on insert, derived fields must already be
    /// calculated by the caller.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        email: &str,
        month: Month,
        date: NaiveDate,
        start_hour: NaiveTime,
        end_hour: NaiveTime,
        break_minutes: i32,
        wage: f64,
        public_holiday: bool,
        night_shift_increase: i32,
        night_shift_start: NaiveTime,
        night_shift_end: NaiveTime,
        hours_worked: f64,
        daily_wage: f64,
    ) -> Self {
        Self {
            id: 0,
            email: email.to_string(),
            month,
            position: 0,
            date,
            start_hour,
            end_hour,
            break_minutes,
            wage,
            public_holiday,
            night_shift_increase,
            night_shift_start,
            night_shift_end,
            hours_worked,
            daily_wage,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_hour.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_hour.format("%H:%M").to_string()
    }

    /// Derived hours, rendered the way totals expect them ("7.00")
    pub fn hours_worked_str(&self) -> String {
        format!("{:.2}", self.hours_worked)
    }

    pub fn daily_wage_str(&self) -> String {
        format!("{:.2}", self.daily_wage)
    }
}
