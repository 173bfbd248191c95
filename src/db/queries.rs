use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::month::Month;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Result, Row, params};

/// Load one user's entries for a month, in display order.
/// A `year` restricts the result to dates in that calendar year.
pub fn load_entries(
    pool: &mut DbPool,
    email: &str,
    month: Month,
    year: Option<i32>,
) -> AppResult<Vec<Entry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM entries
         WHERE email = ?1 AND month = ?2
           AND (?3 IS NULL OR CAST(strftime('%Y', date) AS INTEGER) = ?3)
         ORDER BY position ASC, id ASC",
    )?;

    let rows = stmt.query_map(params![email, month.to_db_str(), year], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let start_str: String = row.get("start_hour")?;
    let start_hour = parse_time_col(&start_str)?;
    let end_str: String = row.get("end_hour")?;
    let end_hour = parse_time_col(&end_str)?;
    let ns_start_str: String = row.get("night_shift_start")?;
    let night_shift_start = parse_time_col(&ns_start_str)?;
    let ns_end_str: String = row.get("night_shift_end")?;
    let night_shift_end = parse_time_col(&ns_end_str)?;

    let month_str: String = row.get("month")?;
    let month = Month::from_db_str(&month_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidMonth(month_str.clone())),
        )
    })?;

    Ok(Entry {
        id: row.get("id")?,
        email: row.get("email")?,
        month,
        position: row.get("position")?,
        date,
        start_hour,
        end_hour,
        break_minutes: row.get("break_minutes")?,
        wage: row.get("wage")?,
        public_holiday: row.get::<_, i32>("public_holiday")? == 1,
        night_shift_increase: row.get("night_shift_increase")?,
        night_shift_start,
        night_shift_end,
        hours_worked: row.get("hours_worked")?,
        daily_wage: row.get("daily_wage")?,
        created_at: row.get("created_at")?,
    })
}

fn parse_time_col(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(s.to_string())),
        )
    })
}

/// Append an entry at the end of its month's list.
pub fn insert_entry(conn: &Connection, entry: &Entry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (email, month, position, date, start_hour, end_hour,
                              break_minutes, wage, public_holiday, night_shift_increase,
                              night_shift_start, night_shift_end, hours_worked,
                              daily_wage, created_at)
         VALUES (?1, ?2,
                 (SELECT COUNT(*) FROM entries WHERE email = ?1 AND month = ?2),
                 ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            entry.email,
            entry.month.to_db_str(),
            entry.date.format("%Y-%m-%d").to_string(),
            entry.start_hour.format("%H:%M").to_string(),
            entry.end_hour.format("%H:%M").to_string(),
            entry.break_minutes,
            entry.wage,
            if entry.public_holiday { 1 } else { 0 },
            entry.night_shift_increase,
            entry.night_shift_start.format("%H:%M").to_string(),
            entry.night_shift_end.format("%H:%M").to_string(),
            entry.hours_worked,
            entry.daily_wage,
            entry.created_at,
        ],
    )?;
    Ok(())
}

/// Replace the entry at display index `index` (0-based) with new field
/// values. Only that row changes; its position is kept.
pub fn replace_entry_at(
    conn: &Connection,
    email: &str,
    month: Month,
    index: usize,
    entry: &Entry,
) -> AppResult<()> {
    let updated = conn.execute(
        "UPDATE entries
         SET date = ?1, start_hour = ?2, end_hour = ?3, break_minutes = ?4,
             wage = ?5, public_holiday = ?6, night_shift_increase = ?7,
             night_shift_start = ?8, night_shift_end = ?9,
             hours_worked = ?10, daily_wage = ?11
         WHERE email = ?12 AND month = ?13 AND position = ?14",
        params![
            entry.date.format("%Y-%m-%d").to_string(),
            entry.start_hour.format("%H:%M").to_string(),
            entry.end_hour.format("%H:%M").to_string(),
            entry.break_minutes,
            entry.wage,
            if entry.public_holiday { 1 } else { 0 },
            entry.night_shift_increase,
            entry.night_shift_start.format("%H:%M").to_string(),
            entry.night_shift_end.format("%H:%M").to_string(),
            entry.hours_worked,
            entry.daily_wage,
            email,
            month.to_db_str(),
            index as i64,
        ],
    )?;

    if updated == 0 {
        return Err(AppError::InvalidIndex(index));
    }
    Ok(())
}

pub fn delete_entry(pool: &mut DbPool, id: i32) -> Result<()> {
    pool.conn.execute("DELETE FROM entries WHERE id = ?", [id])?;
    Ok(())
}

pub fn delete_month(pool: &mut DbPool, email: &str, month: Month) -> Result<usize> {
    pool.conn.execute(
        "DELETE FROM entries WHERE email = ?1 AND month = ?2",
        params![email, month.to_db_str()],
    )
}

/// Reassign positions 0..n for one user/month after a deletion, so the
/// display index of every subsequent entry shifts down by one.
pub fn recalc_positions_for_month(
    conn: &mut Connection,
    email: &str,
    month: Month,
) -> AppResult<()> {
    let ids: Vec<i32> = {
        let mut stmt = conn.prepare(
            "SELECT id FROM entries
             WHERE email = ?1 AND month = ?2
             ORDER BY position ASC, id ASC",
        )?;

        let rows = stmt.query_map(params![email, month.to_db_str()], |row| row.get(0))?;

        let mut v = Vec::new();
        for r in rows {
            v.push(r?);
        }
        v
    };

    for (pos, id) in ids.iter().enumerate() {
        conn.execute(
            "UPDATE entries SET position = ?1 WHERE id = ?2",
            params![pos as i64, id],
        )?;
    }

    Ok(())
}
