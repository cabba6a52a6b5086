use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for weeksheet
#[derive(Parser)]
#[command(
    name = "weeksheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Weekly per-task timesheet reports from ClickUp time entries",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Log pipeline progress to stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or validate the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration (token masked)")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration for missing required values")]
        check: bool,
    },

    /// List workspace members and their employee codes
    Members,

    /// Build the weekly timesheet of one employee
    Report {
        /// Employee code (last four characters of the username)
        employee: String,

        /// First day of the period (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        start: String,

        /// Last day of the period, inclusive (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        end: String,

        /// Output format
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Output directory (defaults to `output_dir` from the config)
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,

        /// Print the table to the terminal as well
        #[arg(long)]
        preview: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
