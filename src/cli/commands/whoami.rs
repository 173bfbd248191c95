use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::users::current_session;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match current_session(&mut pool)? {
        Some(email) => println!("{}", email),
        None => info("No active session."),
    }
    Ok(())
}
