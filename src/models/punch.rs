use chrono::{DateTime, Local};

/// Live punch-clock state. At most one open punch exists per database,
/// persisted as a single row so it survives between CLI invocations.
#[derive(Debug, Clone)]
pub struct PunchState {
    pub email: String,
    pub started_at: DateTime<Local>,
    pub wage: f64,
    pub paused: bool,
    pub pause_started_at: Option<DateTime<Local>>,
    pub paused_minutes: f64,
}
