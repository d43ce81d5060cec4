//! # rebate-calc
//!
//! ```text
//! rebate-calc calculate REB001 PROD001 10     one calculation, exit 1 on failure
//! rebate-calc calculate REB001 PROD001 10 --json
//! rebate-calc list                            show the active catalog
//! rebate-calc                                 prompt for each value
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use rebate_cli::{telemetry, App, Cli, CliConfig};
use tracing::debug;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    config.apply_cli(&cli);
    config.validate()?;

    telemetry::init(&config.log_level)?;
    debug!(?config, "Configuration loaded");

    let app = App::from_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = app.run(cli.command, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(outcome.into())
}
