use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write a default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = match &cli.config_file {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    };

    println!("⚙️  Initializing rPayroll…");
    Config::init_at(&path)?;
    println!("🎉 rPayroll initialization completed!");
    Ok(())
}
