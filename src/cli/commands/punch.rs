use crate::cli::parser::{Commands, PunchAction};
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            PunchAction::In { wage } => {
                let email = AuthLogic::require_login(&mut pool)?;
                PunchLogic::punch_in(&mut pool, &email, *wage)?;
            }
            PunchAction::Pause => {
                AuthLogic::require_login(&mut pool)?;
                PunchLogic::pause(&mut pool)?;
            }
            PunchAction::Resume => {
                AuthLogic::require_login(&mut pool)?;
                PunchLogic::resume(&mut pool)?;
            }
            PunchAction::Out => {
                AuthLogic::require_login(&mut pool)?;
                PunchLogic::punch_out(&mut pool)?;
            }
            PunchAction::Status => PunchLogic::status(&mut pool)?,
        }
    }
    Ok(())
}
