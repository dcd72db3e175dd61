//! rPayroll library root.
//! Exposes the CLI parser, the report parsers, the aggregation engine and
//! the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod parser;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Detect { .. } => cli::commands::detect::handle(&cli.command),
        Commands::Process { .. } => cli::commands::process::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // init writes the file, it must not require a valid one
    let cfg = match (&cli.command, &cli.config_file) {
        (Commands::Init, _) => Config::default(),
        (_, Some(path)) => Config::load_from(&expand_tilde(path))?,
        (_, None) => Config::load()?,
    };

    dispatch(&cli, &cfg)
}
