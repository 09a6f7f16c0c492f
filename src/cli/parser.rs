use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rShiftLog
/// CLI application to log entry/exit times and track the residual against a standard shift
#[derive(Parser)]
#[command(
    name = "rshiftlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log daily entry/exit times and track overtime/undertime against a standard shift",
    long_about = None
)]
pub struct Cli {
    /// Override record store path (useful for tests or a custom file)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Enable debug logging (otherwise RUST_LOG is honoured)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the record store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print the internal log")]
        print: bool,
    },

    /// Compute and store a day (overwrites an existing record for that date)
    Add {
        /// Date of the record (YYYY-MM-DD, default: today)
        date: Option<String>,

        /// Entry time (HH:MM)
        #[arg(long = "in", help = "Entry time (HH:MM)")]
        entry: String,

        /// Exit time (HH:MM)
        #[arg(long = "out", help = "Exit time (HH:MM)")]
        exit: String,
    },

    /// Change entry and/or exit of an existing record
    Edit {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "New entry time (HH:MM)")]
        entry: Option<String>,

        #[arg(long = "out", help = "New exit time (HH:MM)")]
        exit: Option<String>,
    },

    /// Delete the record of a date
    Del {
        date: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List stored records
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Show week/month/year residual totals (working days only)
    Summary {
        #[arg(long, help = "Reference date (YYYY-MM-DD, default: today)")]
        date: Option<String>,
    },

    /// Plot worked hours and daily residuals as text bars
    Chart {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Create a backup copy of the record store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export records sorted by date
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
}
