//! Formatting utilities used for CLI and export outputs.

/// Money rendering: two decimals plus the configured currency symbol.
pub fn money(amount: f64, currency: &str) -> String {
    format!("{:.2}{}", amount, currency)
}

/// Fractional hours rendering ("7.00").
pub fn hours(value: f64) -> String {
    format!("{:.2}", value)
}
