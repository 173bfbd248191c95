//! Live punch clock: punch in, pause/resume, punch out.
//!
//! Punch-out builds a plain entry (no holiday, no night premium) for the
//! month of the punch-in date, with the accumulated paused minutes as the
//! break, and appends it like the wizard would.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::punch::{clear_punch_state, load_punch_state, save_punch_state};
use crate::db::queries::insert_entry;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::month::Month;
use crate::models::punch::PunchState;
use crate::ui::messages::{info, success};
use chrono::{DateTime, Datelike, Local, Timelike};

pub struct PunchLogic;

impl PunchLogic {
    pub fn punch_in(pool: &mut DbPool, email: &str, wage: f64) -> AppResult<()> {
        if wage <= 0.0 {
            return Err(AppError::Punch(
                "hourly wage is required to punch in".into(),
            ));
        }

        if let Some(state) = load_punch_state(pool)? {
            return Err(AppError::Punch(format!(
                "already punched in since {}",
                state.started_at.format("%Y-%m-%d %H:%M")
            )));
        }

        let state = PunchState {
            email: email.to_string(),
            started_at: Local::now(),
            wage,
            paused: false,
            pause_started_at: None,
            paused_minutes: 0.0,
        };

        save_punch_state(pool, &state)?;
        success(format!(
            "Punched in at {}.",
            state.started_at.format("%H:%M")
        ));
        Ok(())
    }

    pub fn pause(pool: &mut DbPool) -> AppResult<()> {
        let mut state = require_open(pool)?;

        if state.paused {
            return Err(AppError::Punch("already paused".into()));
        }

        state.paused = true;
        state.pause_started_at = Some(Local::now());
        save_punch_state(pool, &state)?;

        info("Paused.");
        Ok(())
    }

    pub fn resume(pool: &mut DbPool) -> AppResult<()> {
        let mut state = require_open(pool)?;

        if !state.paused {
            return Err(AppError::Punch("not paused".into()));
        }

        fold_pause(&mut state, Local::now());
        save_punch_state(pool, &state)?;

        info(format!(
            "Resumed ({:.0} paused minutes so far).",
            state.paused_minutes
        ));
        Ok(())
    }

    /// Close the punch and append the resulting entry.
    pub fn punch_out(pool: &mut DbPool) -> AppResult<Entry> {
        let mut state = require_open(pool)?;
        let end = Local::now();

        // Punching out while paused folds the open pause first.
        if state.paused {
            fold_pause(&mut state, end);
        }

        let elapsed = (end - state.started_at).num_minutes() as f64;
        let worked_minutes = (elapsed - state.paused_minutes).max(0.0);

        let hours_worked = worked_minutes / 60.0;
        let daily_wage = worked_minutes * (state.wage / 60.0);

        let date = state.started_at.date_naive();
        let month = Month::from_number(date.month())
            .ok_or_else(|| AppError::InvalidMonth(date.month().to_string()))?;

        let entry = Entry::new(
            &state.email,
            month,
            date,
            truncate_to_minute(&state.started_at),
            truncate_to_minute(&end),
            state.paused_minutes.round() as i32,
            state.wage,
            false,
            0,
            truncate_to_minute(&state.started_at), // unused: premium is zero
            truncate_to_minute(&state.started_at),
            hours_worked,
            daily_wage,
        );

        insert_entry(&pool.conn, &entry)?;
        clear_punch_state(pool)?;

        let _ = ttlog(
            &pool.conn,
            "punch",
            month.to_db_str(),
            &format!("Punched out after {:.0} worked minutes", worked_minutes),
        );

        success(format!(
            "Punched out: {} → {} ({} h, wage {}).",
            entry.start_str(),
            entry.end_str(),
            entry.hours_worked_str(),
            entry.daily_wage_str()
        ));

        Ok(entry)
    }

    pub fn status(pool: &mut DbPool) -> AppResult<()> {
        match load_punch_state(pool)? {
            None => info("No open punch."),
            Some(state) => {
                let flag = if state.paused { " (paused)" } else { "" };
                info(format!(
                    "Punched in since {} at wage {:.2}{}; {:.0} paused minutes.",
                    state.started_at.format("%Y-%m-%d %H:%M"),
                    state.wage,
                    flag,
                    state.paused_minutes
                ));
            }
        }
        Ok(())
    }
}

fn require_open(pool: &mut DbPool) -> AppResult<PunchState> {
    load_punch_state(pool)?.ok_or_else(|| AppError::Punch("not punched in".into()))
}

fn fold_pause(state: &mut PunchState, now: DateTime<Local>) {
    if let Some(started) = state.pause_started_at.take() {
        state.paused_minutes += (now - started).num_seconds() as f64 / 60.0;
    }
    state.paused = false;
}

fn truncate_to_minute(ts: &DateTime<Local>) -> chrono::NaiveTime {
    let t = ts.time();
    chrono::NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}
