/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Holiday rows are highlighted; plain days get no color.
pub fn color_for_holiday(is_holiday: bool) -> &'static str {
    if is_holiday { MAGENTA } else { RESET }
}

/// Zero totals are greyed out in the month grid.
pub fn colorize_total(value: f64, formatted: &str) -> String {
    if value == 0.0 {
        format!("{GREY}{formatted}{RESET}")
    } else {
        formatted.to_string()
    }
}
