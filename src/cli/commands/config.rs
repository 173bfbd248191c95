use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();
        let path_str = path.to_string_lossy();

        if *print_config {
            println!("📄 Current configuration:\n");
            ConfigLogic::print(&path_str)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path_str, editor)?;
        }

        if !*print_config && !*edit_config {
            info("Nothing to do. Try `wagelog config --print`.");
        }
    }

    Ok(())
}
