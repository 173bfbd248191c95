use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations applied.");
        }

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

            if result == "ok" {
                success("Database integrity: OK");
            } else {
                error(format!("Database integrity check failed: {}", result));
            }
        }

        if *vacuum {
            pool.conn.execute("VACUUM", [])?;
            success("Database vacuumed.");
        }

        if *show_info {
            print_db_info(&mut pool, &cfg.database)?;
        }

        if !*migrate && !*check && !*vacuum && !*show_info {
            info("Nothing to do. Try `wagelog db --info`.");
        }
    }
    Ok(())
}
