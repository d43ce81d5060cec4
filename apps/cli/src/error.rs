//! CLI error types.

use rebate_store::StoreError;
use thiserror::Error;

/// Errors that stop the CLI before or around a calculation.
///
/// A calculation that fails (unknown rebate, incompatible product, ...)
/// is NOT one of these: it is reported as a failed `CalculationResult`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Volume must be a valid decimal number, got '{0}'")]
    InvalidVolume(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to initialise logging: {0}")]
    Telemetry(String),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(err.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;
