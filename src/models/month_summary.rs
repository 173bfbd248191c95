use super::month::Month;

/// Aggregated totals for one calendar month.
#[derive(Debug, Clone)]
pub struct MonthSummary {
    pub month: Month,
    pub entry_count: usize,
    pub total_hours: f64,
    pub total_wage: f64,
}
