//! # rebate-cli
//!
//! Library half of the `rebate-calc` binary. `main.rs` only parses
//! arguments, loads configuration and hands over to [`App`].
//!
//! ## Modules
//!
//! - [`cli`] - clap definitions
//! - [`config`] - `CliConfig` (defaults → TOML → env → flags)
//! - [`app`] - Store and calculator wiring, command dispatch
//! - [`render`] - Text and JSON output
//! - [`telemetry`] - Tracing subscriber setup
//! - [`error`] - `CliError`

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod telemetry;

pub use app::{App, Outcome};
pub use cli::{Cli, Command};
pub use config::{CliConfig, OutputFormat};
pub use error::{CliError, CliResult};
