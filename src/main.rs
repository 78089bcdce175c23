//! Relay configuration check.
//!
//! Runs the startup sequence the relay uses (override file, environment,
//! validation, logging) and reports the outcome.
//!
//! ```text
//! relay-config                      # validate, log the summary
//! relay-config --env-file prod.env  # use another override file
//! relay-config --json               # also print the summary as JSON
//! ```
//!
//! Exits with status 1 when the configuration is rejected.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use relay_config::config::env::DEFAULT_ENV_FILE;
use relay_config::lifecycle::bootstrap;

#[derive(Parser)]
#[command(name = "relay-config")]
#[command(about = "Validate relay configuration from the environment", long_about = None)]
struct Cli {
    /// Override file merged into the environment (existing variables win).
    #[arg(short, long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Print the configuration summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let startup = match bootstrap(&cli.env_file) {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&startup.manager.summary()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!(error = %e, "Failed to render configuration summary");
                return ExitCode::FAILURE;
            }
        }
    }

    tracing::info!("Configuration is valid");
    ExitCode::SUCCESS
}
