use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for wagelog
/// CLI application to track shifts and daily wages with SQLite
#[derive(Parser)]
#[command(
    name = "wagelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work shifts and compute daily wages (night-shift and holiday premiums) using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Create an account
    Signup {
        /// Account email (unique)
        email: String,

        /// Account password
        password: String,
    },

    /// Log in and remember the session
    Login {
        email: String,

        password: String,
    },

    /// Forget the current session
    Logout,

    /// Print the logged-in user
    Whoami,

    /// Add or edit a shift entry (the entry wizard)
    Add {
        /// Month name (january..december) or number (1-12)
        month: String,

        /// Day of the month (1-31)
        day: u32,

        /// Start hour (HH:MM)
        #[arg(long = "in", help = "Shift start hour (HH:MM)")]
        start: Option<String>,

        /// End hour (HH:MM); may roll past midnight
        #[arg(long = "out", help = "Shift end hour (HH:MM)")]
        end: Option<String>,

        /// Break duration in minutes
        #[arg(long = "break", default_value_t = 0)]
        break_minutes: i32,

        /// Hourly wage
        #[arg(long = "wage", default_value_t = 0.0)]
        wage: f64,

        /// Mark the day as a public holiday (doubles the daily wage)
        #[arg(long = "holiday")]
        holiday: bool,

        /// Night-shift premium percentage (default from config)
        #[arg(long = "night-rate")]
        night_rate: Option<i32>,

        /// Night window start (HH:MM, default from config)
        #[arg(long = "night-start")]
        night_start: Option<String>,

        /// Night window end (HH:MM, default from config)
        #[arg(long = "night-end")]
        night_end: Option<String>,

        /// Calendar year of the entry (default: current year)
        #[arg(long = "year")]
        year: Option<i32>,

        /// Display index to replace (used with --edit)
        #[arg(long = "index", help = "Entry index to edit (with --edit)")]
        edit_index: Option<usize>,

        /// Enable edit mode (requires --index)
        #[arg(
            long = "edit",
            requires = "edit_index",
            help = "Edit existing entry instead of appending a new one"
        )]
        edit: bool,
    },

    /// Delete a shift entry by index, or a whole month
    Del {
        /// Month name (january..december) or number (1-12)
        month: String,

        #[arg(long = "index", help = "Entry index to delete for the given month")]
        index: Option<usize>,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List one month's entries with totals
    List {
        /// Month name (january..december) or number (1-12)
        month: String,

        /// Restrict the listing to one calendar year
        #[arg(long = "year")]
        year: Option<i32>,
    },

    /// Show the twelve-month grid of total hours and earnings
    Months {
        /// Restrict the grid to one calendar year
        #[arg(long = "year")]
        year: Option<i32>,
    },

    /// Live punch clock (in/pause/resume/out/status)
    Punch {
        #[command(subcommand)]
        action: PunchAction,
    },

    /// Export shift entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Restrict the export to one month
        #[arg(long)]
        month: Option<String>,

        /// Restrict the export to one calendar year
        #[arg(long)]
        year: Option<i32>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}

#[derive(Subcommand)]
pub enum PunchAction {
    /// Start a live shift now (hourly wage required)
    In {
        #[arg(long)]
        wage: f64,
    },

    /// Pause the running shift
    Pause,

    /// Resume a paused shift
    Resume,

    /// Close the shift and record the entry
    Out,

    /// Show the punch clock state
    Status,
}
