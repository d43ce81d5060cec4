//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

/// Installs a stderr subscriber. `RUST_LOG` wins over `log_level`.
pub fn init(log_level: &str) -> CliResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|e| {
            CliError::Telemetry(format!("invalid log level/filter '{}': {}", log_level, e))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| CliError::Telemetry(e.to_string()))
}
