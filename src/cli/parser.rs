use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPayroll
#[derive(Parser)]
#[command(
    name = "rpayroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn payroll and timeclock exports into regular/overtime payroll reports",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config-file", value_name = "FILE")]
    pub config_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
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

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", requires = "edit_config")]
        editor: Option<String>,
    },

    /// Show the detected layout, stores and usable records of each file
    Detect {
        /// Report files to inspect
        #[arg(required = true, value_name = "FILES")]
        files: Vec<String>,
    },

    /// Parse report files and write the payroll tables
    Process {
        /// Report files (payroll or timeclock exports)
        #[arg(required = true, value_name = "FILES")]
        files: Vec<String>,

        /// Pay period start date (YYYY-MM-DD, default: today)
        #[arg(long, value_name = "DATE")]
        start: Option<String>,

        /// Wage change date (YYYY-MM-DD, default from configuration)
        #[arg(long = "wage-date", value_name = "DATE")]
        wage_date: Option<String>,

        /// Do not produce the wage-period split
        #[arg(long = "no-wage-split", conflicts_with = "wage_date")]
        no_wage_split: bool,

        /// Output directory (default from configuration)
        #[arg(long, value_name = "DIR")]
        out: Option<String>,

        /// Output format (default from configuration)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Write loose CSV files instead of a ZIP archive
        #[arg(long = "no-archive")]
        no_archive: bool,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
