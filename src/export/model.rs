use serde::Serialize;

/// Flat entry representation shared by every export backend.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub month: String,
    pub index: i32,
    pub date: String,
    pub start_hour: String,
    pub end_hour: String,
    pub break_minutes: i32,
    pub wage: f64,
    pub public_holiday: bool,
    pub night_shift_increase: i32,
    pub night_shift_start: String,
    pub night_shift_end: String,
    pub hours_worked: f64,
    pub daily_wage: f64,
}

/// Header row for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "month",
        "index",
        "date",
        "start_hour",
        "end_hour",
        "break_minutes",
        "wage",
        "public_holiday",
        "night_shift_increase",
        "night_shift_start",
        "night_shift_end",
        "hours_worked",
        "daily_wage",
    ]
}

/// One entry as a row of display strings (XLSX path).
pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.month.clone(),
        e.index.to_string(),
        e.date.clone(),
        e.start_hour.clone(),
        e.end_hour.clone(),
        e.break_minutes.to_string(),
        format!("{:.2}", e.wage),
        e.public_holiday.to_string(),
        e.night_shift_increase.to_string(),
        e.night_shift_start.clone(),
        e.night_shift_end.clone(),
        format!("{:.2}", e.hours_worked),
        format!("{:.2}", e.daily_wage),
    ]
}
