use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::month::Month;
use crate::ui::messages::{info, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { month, index, yes } = cmd {
        let m = Month::from_input(month).ok_or_else(|| AppError::InvalidMonth(month.clone()))?;

        //
        // Confirmation prompt
        //
        let prompt = if let Some(i) = index {
            format!(
                "Delete entry #{} for {}? This action is irreversible.",
                i,
                m.display_name()
            )
        } else {
            format!(
                "Delete ALL entries for {}? This action is irreversible.",
                m.display_name()
            )
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let email = AuthLogic::require_login(&mut pool)?;

        DeleteLogic::apply(&mut pool, &email, m, *index)?;
    }

    Ok(())
}
