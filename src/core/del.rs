use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entry, delete_month, load_entries, recalc_positions_for_month};
use crate::errors::{AppError, AppResult};
use crate::models::month::Month;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a single entry by display index, or the whole month.
    /// After an index delete, positions of later entries shift down by one.
    pub fn apply(
        pool: &mut DbPool,
        email: &str,
        month: Month,
        index: Option<usize>,
    ) -> AppResult<()> {
        let entries = load_entries(pool, email, month, None)?;

        if entries.is_empty() {
            return Err(AppError::NoEntriesForMonth(month.display_name()));
        }

        if let Some(i) = index {
            let target = entries.get(i).ok_or(AppError::InvalidIndex(i))?.clone();

            delete_entry(pool, target.id)?;
            recalc_positions_for_month(&mut pool.conn, email, month)?;

            let _ = ttlog(
                &pool.conn,
                "del",
                &format!("{}/{}", month.to_db_str(), i),
                &format!("Entry deleted for {}", target.date_str()),
            );

            info(format!(
                "Deleted entry #{} ({}) for {}.",
                i,
                target.date_str(),
                month.display_name()
            ));
            return Ok(());
        }

        let removed = delete_month(pool, email, month)?;
        let _ = ttlog(
            &pool.conn,
            "del",
            month.to_db_str(),
            &format!("{} entries deleted", removed),
        );

        info(format!(
            "Deleted all {} entries for {}.",
            removed,
            month.display_name()
        ));
        Ok(())
    }
}
