use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDaybook
/// CLI application to track daily revenue and working hours with SQLite
#[derive(Parser)]
#[command(
    name = "rdaybook",
    version = env!("CARGO_PKG_VERSION"),
    about = "A daily revenue and hours tracker: per-client sales, hourly rate and monthly reports on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Username for the access gate
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Password for the access gate
    #[arg(global = true, long = "password")]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Commands that read or write records go through the access gate.
    pub fn needs_access(&self) -> bool {
        !matches!(
            self.command,
            Commands::Init | Commands::Config { .. } | Commands::Db { .. }
        )
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Save one day (overwrites the stored record of the same date)
    Add {
        /// Day to save (YYYY-MM-DD or "today")
        date: String,

        #[arg(long = "hours", help = "Total working hours (e.g. 6.5)")]
        hours: Option<String>,

        #[arg(long = "flex", help = "Flex working hours")]
        flex: Option<String>,

        #[arg(long = "fresh", help = "Fresh working hours")]
        fresh: Option<String>,

        /// Client revenue as KEY=AMOUNT, repeatable (e.g. --client u=12000)
        #[arg(long = "client", short = 'c', value_name = "KEY=AMOUNT")]
        clients: Vec<String>,

        #[arg(long = "memo", help = "Free-text note for the day")]
        memo: Option<String>,

        #[arg(long = "reset", help = "Start from a blank day instead of the stored values")]
        reset: bool,
    },

    /// Show the stored record of one day
    Show {
        /// Day to show (YYYY-MM-DD or "today")
        date: String,
    },

    /// List the records of one month
    List {
        #[arg(
            long,
            short,
            value_name = "YYYY-MM",
            help = "Month to list (default: latest month with data)"
        )]
        month: Option<String>,
    },

    /// Delete days, or every record of a month
    Del {
        /// Days to delete (YYYY-MM-DD)
        dates: Vec<String>,

        #[arg(
            long,
            value_name = "YYYY-MM",
            conflicts_with = "dates",
            help = "Delete every record of this month"
        )]
        month: Option<String>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the monthly report
    Report {
        #[arg(
            long,
            short,
            value_name = "YYYY-MM",
            help = "Month to report (default: current month)"
        )]
        month: Option<String>,
    },

    /// Export records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import records from a CSV file (insert or replace by date)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "YYYY-MM",
            help = "Replace this whole month with the file contents"
        )]
        month: Option<String>,
    },
}
