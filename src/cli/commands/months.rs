use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::summary::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::AppResult;
use crate::models::month::ALL_MONTHS;
use crate::utils::colors::colorize_total;
use crate::utils::formatting::hours;
use crate::utils::money;
use crate::utils::table::Table;

/// The month grid: per-month total hours and earnings for the whole year.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Months { year } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let email = AuthLogic::require_login(&mut pool)?;

        let mut table = Table::new(vec!["Month", "Entries", "Hours", "Earned"]);

        let mut year_hours = 0.0;
        let mut year_wage = 0.0;

        for m in ALL_MONTHS {
            let entries = load_entries(&mut pool, &email, m, *year)?;
            let summary = Core::build_month_summary(m, &entries);

            year_hours += summary.total_hours;
            year_wage += summary.total_wage;

            table.add_row(vec![
                m.display_name(),
                summary.entry_count.to_string(),
                colorize_total(summary.total_hours, &hours(summary.total_hours)),
                colorize_total(summary.total_wage, &money(summary.total_wage, &cfg.currency)),
            ]);
        }

        match year {
            Some(y) => println!("📅 Months overview for {} in {}:\n", email, y),
            None => println!("📅 Months overview for {}:\n", email),
        }
        print!("{}", table.render());
        println!(
            "\nTotal: {} h / {}",
            hours(year_hours),
            money(year_wage, &cfg.currency)
        );
    }
    Ok(())
}
