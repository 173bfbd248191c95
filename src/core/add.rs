//! High-level business logic for the `add` command: the entry wizard.

use crate::core::calculator::hours::worked_minutes;
use crate::core::calculator::wage::{WageInput, calculate_daily_wage};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_entry, replace_entry_at};
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::month::Month;
use crate::ui::messages::success;
use crate::utils::date::entry_date;
use crate::utils::time::parse_required_time;

/// Raw wizard input, after CLI parsing but before validation.
/// Night-shift defaults are resolved from the config by the CLI layer.
#[derive(Debug, Clone)]
pub struct AddArgs {
    pub month: Month,
    pub day: u32,
    pub year: i32,
    pub start: Option<String>,
    pub end: Option<String>,
    pub break_minutes: i32,
    pub wage: f64,
    pub public_holiday: bool,
    pub night_shift_increase: i32,
    pub night_shift_start: String,
    pub night_shift_end: String,
}

pub struct AddLogic;

impl AddLogic {
    /// Validate wizard input in the original step order, compute the
    /// derived fields, and append the entry (or replace index `edit_index`
    /// in edit mode). Derived fields are recomputed on every save.
    pub fn apply(
        pool: &mut DbPool,
        email: &str,
        args: &AddArgs,
        edit_mode: bool,
        edit_index: Option<usize>,
    ) -> AppResult<Entry> {
        //
        // 1. Day must lie in 1-31 and form a real calendar date
        //
        if args.day < 1 || args.day > 31 {
            return Err(AppError::InvalidDay(args.day.to_string()));
        }
        let date = entry_date(args.year, args.month, args.day)
            .ok_or_else(|| AppError::InvalidDay(args.day.to_string()))?;

        //
        // 2. Start and end hours must both be present and parse
        //
        let start_raw = args
            .start
            .as_deref()
            .ok_or_else(|| AppError::InvalidTime("missing start hour (--in)".into()))?;
        let end_raw = args
            .end
            .as_deref()
            .ok_or_else(|| AppError::InvalidTime("missing end hour (--out)".into()))?;

        let start = parse_required_time(start_raw)?;
        let end = parse_required_time(end_raw)?;

        let night_start = parse_required_time(&args.night_shift_start)?;
        let night_end = parse_required_time(&args.night_shift_end)?;

        //
        // 3. Worked duration (elapsed minus break) must be positive
        //
        let minutes = worked_minutes(start, end, args.break_minutes);
        if minutes <= 0 {
            return Err(AppError::NonPositiveDuration);
        }

        //
        // Derived fields
        //
        let hours_worked = minutes as f64 / 60.0;
        let daily_wage = calculate_daily_wage(&WageInput {
            start,
            end,
            break_minutes: args.break_minutes,
            wage: args.wage,
            public_holiday: args.public_holiday,
            night_shift_increase: args.night_shift_increase,
            night_shift_start: night_start,
            night_shift_end: night_end,
        });

        let entry = Entry::new(
            email,
            args.month,
            date,
            start,
            end,
            args.break_minutes,
            args.wage,
            args.public_holiday,
            args.night_shift_increase,
            night_start,
            night_end,
            hours_worked,
            daily_wage,
        );

        //
        // Save: append, or replace exactly one index in edit mode
        //
        if edit_mode {
            let index = edit_index
                .ok_or_else(|| AppError::Other("Missing --index when using --edit.".into()))?;

            replace_entry_at(&pool.conn, email, args.month, index, &entry)?;
            let _ = ttlog(
                &pool.conn,
                "edit",
                &format!("{}/{}", args.month.to_db_str(), index),
                &format!("Entry replaced for {}", entry.date_str()),
            );

            success(format!(
                "Updated entry #{} for {} ({} → {}).",
                index,
                args.month.display_name(),
                entry.start_str(),
                entry.end_str()
            ));
        } else {
            insert_entry(&pool.conn, &entry)?;
            let _ = ttlog(
                &pool.conn,
                "add",
                args.month.to_db_str(),
                &format!("Entry added for {}", entry.date_str()),
            );

            success(format!(
                "Added entry for {}: {} → {} ({} h, wage {}).",
                entry.date_str(),
                entry.start_str(),
                entry.end_str(),
                entry.hours_worked_str(),
                entry.daily_wage_str()
            ));
        }

        Ok(entry)
    }
}
