use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddArgs, AddLogic};
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::month::Month;
use crate::utils::date;

/// Add or edit a shift entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        month,
        day,
        start,
        end,
        break_minutes,
        wage,
        holiday,
        night_rate,
        night_start,
        night_end,
        year,
        edit_index,
        edit,
    } = cmd
    {
        //
        // 1. Parse month (mandatory)
        //
        let m = Month::from_input(month).ok_or_else(|| AppError::InvalidMonth(month.clone()))?;

        //
        // 2. Night-shift defaults come from the config
        //
        let args = AddArgs {
            month: m,
            day: *day,
            year: year.unwrap_or_else(date::current_year),
            start: start.clone(),
            end: end.clone(),
            break_minutes: *break_minutes,
            wage: *wage,
            public_holiday: *holiday,
            night_shift_increase: night_rate.unwrap_or(cfg.default_night_shift_increase),
            night_shift_start: night_start
                .clone()
                .unwrap_or_else(|| cfg.default_night_shift_start.clone()),
            night_shift_end: night_end
                .clone()
                .unwrap_or_else(|| cfg.default_night_shift_end.clone()),
        };

        //
        // 3. Open DB and resolve the session
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let email = AuthLogic::require_login(&mut pool)?;

        //
        // 4. Execute logic
        //
        AddLogic::apply(&mut pool, &email, &args, *edit, *edit_index)?;
    }

    Ok(())
}
