use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog:
/// a CLI ledger for work sessions, earnings, and payment status.
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work sessions, earnings, and payment status from the command line",
    long_about = None
)]
pub struct Cli {
    /// Override storage path (useful for tests or custom databases)
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
    /// Initialize the configuration and storage
    Init,

    /// Show the configuration or change the default hourly rate
    Config {
        #[arg(long = "print", help = "Print the current configuration and settings")]
        print_config: bool,

        #[arg(
            long = "rate",
            value_name = "RATE",
            help = "Set the default hourly rate applied to new entries without one"
        )]
        rate: Option<String>,
    },

    /// Record a work session
    Add {
        /// Date of the session (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        #[arg(long = "in", value_name = "HH:MM")]
        start: String,

        /// End time (HH:MM); at or before the start means the session ran
        /// into the next day
        #[arg(long = "out", value_name = "HH:MM")]
        end: String,

        /// What was worked on
        #[arg(long = "desc", value_name = "TEXT")]
        description: String,

        /// Hourly rate; falls back to the configured default
        #[arg(long = "rate", value_name = "RATE")]
        rate: Option<String>,

        /// Mark the session as already paid
        #[arg(long = "paid")]
        paid: bool,
    },

    /// List recorded sessions
    List {
        /// Filter by period: YYYY, YYYY-MM, YYYY-MM-DD, or a start:end range
        /// of any of those (e.g. "2025-06", "2025-06-01:2025-06-10")
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,

        /// Show only paid sessions
        #[arg(long = "paid", conflicts_with = "unpaid")]
        paid: bool,

        /// Show only unpaid sessions
        #[arg(long = "unpaid", conflicts_with = "paid")]
        unpaid: bool,
    },

    /// Edit an existing session (fields left out stay unchanged)
    Edit {
        /// Entry id (any unambiguous prefix works)
        id: String,

        #[arg(long = "date", value_name = "YYYY-MM-DD")]
        date: Option<String>,

        #[arg(long = "in", value_name = "HH:MM")]
        start: Option<String>,

        #[arg(long = "out", value_name = "HH:MM")]
        end: Option<String>,

        #[arg(long = "desc", value_name = "TEXT")]
        description: Option<String>,

        #[arg(long = "rate", value_name = "RATE")]
        rate: Option<String>,

        /// Mark as paid
        #[arg(long = "paid", conflicts_with = "unpaid")]
        paid: bool,

        /// Mark as unpaid
        #[arg(long = "unpaid", conflicts_with = "paid")]
        unpaid: bool,
    },

    /// Delete a session
    Del {
        /// Entry id (any unambiguous prefix works)
        id: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Toggle the payment status of one session
    Paid {
        /// Entry id (any unambiguous prefix works)
        id: String,
    },

    /// Show per-day summaries (newest day first)
    Summary {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,
    },

    /// Show global statistics
    Stats,

    /// Export sessions as a spreadsheet-friendly CSV table
    Export {
        /// Output file; defaults to controle-horas-<date>.csv
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Write a full backup artifact (entries + settings)
    Backup {
        /// Output file; defaults to backup-controle-horas-<date>.json
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Compress the artifact into a zip archive
        #[arg(long)]
        compress: bool,
    },

    /// Restore entries and settings from a backup artifact
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Remove all stored entries and settings
    Clear {
        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}
