//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --catalog ./catalog.json    --json                                 │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     REBATE_CATALOG=./catalog.json                                      │
//! │     REBATE_LOG=debug                                                   │
//! │     REBATE_OUTPUT=json                                                 │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/calc/config.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.rebate.calc/config.toml (macOS)  │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     demo catalog, log_level = "warn", output = "text"                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # config.toml
//! catalog = "/srv/rebates/catalog.json"
//! log_level = "info"   # any tracing EnvFilter directive
//! output = "text"      # text | json
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cli::{Cli, Command};
use crate::error::{CliError, CliResult};

// =============================================================================
// Output Format
// =============================================================================

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable blocks.
    #[default]
    Text,

    /// One JSON document per command.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::Config(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// CLI Configuration
// =============================================================================

/// Settings for one `rebate-calc` invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog file to load. `None` uses the built-in demo dataset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub output: OutputFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            catalog: None,
            log_level: default_log_level(),
            output: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`explicit_path`, else the platform default)
    /// 3. Environment variables
    ///
    /// An explicit path that does not exist is an error; a missing
    /// platform default is not.
    pub fn load(explicit_path: Option<&Path>) -> CliResult<Self> {
        let mut config = match explicit_path {
            Some(path) if !path.exists() => {
                return Err(CliError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config document.
    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.log_level.trim().is_empty() {
            return Err(CliError::Config("log_level must not be empty".into()));
        }

        if let Some(ref path) = self.catalog {
            if path.as_os_str().is_empty() {
                return Err(CliError::Config("catalog path must not be empty".into()));
            }
        }

        Ok(())
    }

    /// Applies environment variable overrides read through `lookup`.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Catalog path
        if let Some(path) = lookup("REBATE_CATALOG") {
            debug!(path = %path, "Overriding catalog from environment");
            self.catalog = Some(PathBuf::from(path));
        }

        // Log filter
        if let Some(level) = lookup("REBATE_LOG") {
            self.log_level = level;
        }

        // Output format
        if let Some(format) = lookup("REBATE_OUTPUT") {
            match format.parse() {
                Ok(parsed) => self.output = parsed,
                Err(_) => warn!(format = %format, "Unknown output format in environment"),
            }
        }
    }

    /// Applies command line flags, which win over every other source.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref path) = cli.catalog {
            self.catalog = Some(path.clone());
        }

        if let Some(Command::Calculate(ref args)) = cli.command {
            if args.json {
                self.output = OutputFormat::Json;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rebate", "calc")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
