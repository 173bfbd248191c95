use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::month::Month;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        year,
        force,
    } = cmd
    {
        let m = match month {
            Some(raw) => Some(
                Month::from_input(raw).ok_or_else(|| AppError::InvalidMonth(raw.clone()))?,
            ),
            None => None,
        };

        let out = expand_tilde(file);

        let mut pool = DbPool::new(&cfg.database)?;
        let email = AuthLogic::require_login(&mut pool)?;

        ExportLogic::export(
            &mut pool,
            &email,
            format.clone(),
            &out.to_string_lossy(),
            m,
            *year,
            *force,
        )?;
    }
    Ok(())
}
