use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::EntryExport;
use crate::models::month::Month;
use crate::ui::messages::warning;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use rusqlite::{Row, params};
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the logged-in user's entries.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path
    /// - `month`: `None` for all twelve months, or a single month
    /// - `year`: `None` for every year on record, or a single year
    pub fn export(
        pool: &mut DbPool,
        email: &str,
        format: ExportFormat,
        file: &str,
        month: Option<Month>,
        year: Option<i32>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let label = format.as_str();
        let entries = load_entries(pool, email, month, year)?;

        if entries.is_empty() {
            warning("⚠️  No entries found for the selected month.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
            ExportFormat::Xlsx => export_xlsx(&entries, path)?,
        }

        let _ = ttlog(
            &pool.conn,
            "export",
            label,
            &format!("{} entries exported to {}", entries.len(), path.display()),
        );

        Ok(())
    }
}

/// Load export rows, keeping each month's display order.
fn load_entries(
    pool: &mut DbPool,
    email: &str,
    month: Option<Month>,
    year: Option<i32>,
) -> AppResult<Vec<EntryExport>> {
    let conn = &mut pool.conn;

    let mut entries = Vec::new();

    match month {
        None => {
            let mut stmt = conn.prepare(
                "SELECT month, position, date, start_hour, end_hour, break_minutes,
                        wage, public_holiday, night_shift_increase,
                        night_shift_start, night_shift_end, hours_worked, daily_wage
                 FROM entries
                 WHERE email = ?1
                   AND (?2 IS NULL OR CAST(strftime('%Y', date) AS INTEGER) = ?2)
                 ORDER BY date ASC, position ASC",
            )?;

            let rows = stmt.query_map(params![email, year], map_row)?;

            for r in rows {
                entries.push(r?);
            }
        }
        Some(m) => {
            let mut stmt = conn.prepare(
                "SELECT month, position, date, start_hour, end_hour, break_minutes,
                        wage, public_holiday, night_shift_increase,
                        night_shift_start, night_shift_end, hours_worked, daily_wage
                 FROM entries
                 WHERE email = ?1 AND month = ?2
                   AND (?3 IS NULL OR CAST(strftime('%Y', date) AS INTEGER) = ?3)
                 ORDER BY position ASC",
            )?;

            let rows = stmt.query_map(params![email, m.to_db_str(), year], map_row)?;

            for r in rows {
                entries.push(r?);
            }
        }
    }

    Ok(entries)
}

/// DB row → EntryExport mapping (shared by both queries).
fn map_row(row: &Row<'_>) -> rusqlite::Result<EntryExport> {
    Ok(EntryExport {
        month: row.get(0)?,
        index: row.get(1)?,
        date: row.get(2)?,
        start_hour: row.get(3)?,
        end_hour: row.get(4)?,
        break_minutes: row.get(5)?,
        wage: row.get(6)?,
        public_holiday: row.get::<_, i32>(7)? == 1,
        night_shift_increase: row.get(8)?,
        night_shift_start: row.get(9)?,
        night_shift_end: row.get(10)?,
        hours_worked: row.get(11)?,
        daily_wage: row.get(12)?,
    })
}
