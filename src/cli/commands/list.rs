use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::summary::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::month::Month;
use crate::models::month_summary::MonthSummary;
use crate::utils::colors::{RESET, YELLOW, color_for_holiday};
use crate::utils::formatting::hours;
use crate::utils::money;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month, year } = cmd {
        let m = Month::from_input(month).ok_or_else(|| AppError::InvalidMonth(month.clone()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let email = AuthLogic::require_login(&mut pool)?;

        let entries = load_entries(&mut pool, &email, m, *year)?;

        if entries.is_empty() {
            println!("No entries for {}.", m.display_name());
            return Ok(());
        }

        let summary = Core::build_month_summary(m, &entries);
        print_month(&summary, &entries, &cfg.currency);
    }
    Ok(())
}

fn print_month(summary: &MonthSummary, entries: &[Entry], currency: &str) {
    println!(
        "📅 Entries for {} ({}):\n",
        summary.month.display_name(),
        summary.entry_count
    );

    let mut table = Table::new(vec![
        "#",
        "Date",
        "Start",
        "End",
        "Break",
        "Night %",
        "Win start",
        "Win end",
        "Holiday",
        "Hours",
        "Wage",
    ]);

    for entry in entries {
        table.add_row(vec![
            entry.position.to_string(),
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            entry.break_minutes.to_string(),
            format!("{}%", entry.night_shift_increase),
            entry.night_shift_start.format("%H:%M").to_string(),
            entry.night_shift_end.format("%H:%M").to_string(),
            format!(
                "{}{}{}",
                color_for_holiday(entry.public_holiday),
                if entry.public_holiday { "yes" } else { "no" },
                RESET
            ),
            entry.hours_worked_str(),
            money(entry.daily_wage, currency),
        ]);
    }

    print!("{}", table.render());

    println!(
        "\n{}Total hours: {}{} / Total wage: {}",
        YELLOW,
        hours(summary.total_hours),
        RESET,
        money(summary.total_wage, currency),
    );
}
