//! Punch-clock state persistence (single row).

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::punch::PunchState;
use chrono::{DateTime, Local};
use rusqlite::{OptionalExtension, params};

pub fn load_punch_state(pool: &mut DbPool) -> AppResult<Option<PunchState>> {
    let state = pool
        .conn
        .query_row(
            "SELECT email, started_at, wage, paused, pause_started_at, paused_minutes
             FROM punch_state WHERE id = 1",
            [],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, i32>(3)? == 1,
                    row.get::<_, Option<String>>(4)?,
                    row.get::<_, f64>(5)?,
                ))
            },
        )
        .optional()?;

    let Some((email, started_at, wage, paused, pause_started_at, paused_minutes)) = state else {
        return Ok(None);
    };

    let started_at = parse_ts(&started_at)?;
    let pause_started_at = match pause_started_at {
        Some(raw) => Some(parse_ts(&raw)?),
        None => None,
    };

    Ok(Some(PunchState {
        email,
        started_at,
        wage,
        paused,
        pause_started_at,
        paused_minutes,
    }))
}

pub fn save_punch_state(pool: &mut DbPool, state: &PunchState) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO punch_state
             (id, email, started_at, wage, paused, pause_started_at, paused_minutes)
         VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
             email = excluded.email,
             started_at = excluded.started_at,
             wage = excluded.wage,
             paused = excluded.paused,
             pause_started_at = excluded.pause_started_at,
             paused_minutes = excluded.paused_minutes",
        params![
            state.email,
            state.started_at.to_rfc3339(),
            state.wage,
            if state.paused { 1 } else { 0 },
            state.pause_started_at.map(|t| t.to_rfc3339()),
            state.paused_minutes,
        ],
    )?;
    Ok(())
}

pub fn clear_punch_state(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute("DELETE FROM punch_state WHERE id = 1", [])?;
    Ok(())
}

fn parse_ts(raw: &str) -> AppResult<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| AppError::Punch(format!("corrupt punch timestamp: {raw}")))
}
