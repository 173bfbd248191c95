use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Signup { email, password } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        AuthLogic::signup(&mut pool, email, password)?;
    }
    Ok(())
}
