//! # Application Wiring
//!
//! Builds the store and calculator from a [`CliConfig`] and runs one
//! command against them.
//!
//! ```text
//! CliConfig ──► Catalog::load / demo_catalog ──► Store
//!                                                  │
//!              RebateCalculator::builder() ◄───────┘
//!                      │
//!   calculate ─────────┤
//!   interactive ───────┤──► render ──► stdout
//!   list ──────────────┘
//! ```

use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

use rebate_core::{CalculationRequest, RebateCalculator, RuleRegistry};
use rebate_store::{Catalog, Store};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::cli::Command;
use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::render;

/// What a command run amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did what was asked.
    Completed,
    /// A calculation ran and reported failure.
    CalculationFailed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Completed => ExitCode::SUCCESS,
            Outcome::CalculationFailed => ExitCode::from(1),
        }
    }
}

/// Parses a volume string (surrounding whitespace allowed).
pub fn parse_volume(raw: &str) -> CliResult<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|_| CliError::InvalidVolume(raw.trim().to_string()))
}

/// A configured store and calculator.
#[derive(Debug)]
pub struct App {
    store: Store,
    calculator: RebateCalculator,
    format: OutputFormat,
}

impl App {
    /// Loads the configured catalog (or the demo dataset) and wires the
    /// calculator to it.
    pub fn from_config(config: &CliConfig) -> CliResult<Self> {
        let catalog = match config.catalog {
            Some(ref path) => Catalog::load(path)?,
            None => {
                debug!("No catalog configured, using demo dataset");
                rebate_store::demo_catalog()
            }
        };
        let store = Store::from_catalog(catalog)?;
        Self::with_store(store, config.output)
    }

    pub fn with_store(store: Store, format: OutputFormat) -> CliResult<Self> {
        let calculator = RebateCalculator::builder()
            .rebates(store.rebates())
            .products(store.products())
            .registry(RuleRegistry::standard())
            .sink(store.calculations())
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(App {
            store,
            calculator,
            format,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Runs `command`; `None` means interactive mode.
    pub fn run(
        &self,
        command: Option<Command>,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> CliResult<Outcome> {
        match command {
            Some(Command::Calculate(args)) => {
                let volume = parse_volume(&args.volume)?;
                self.calculate(CalculationRequest::new(args.rebate, args.product, volume), out)
            }
            Some(Command::List) => {
                render::catalog(out, &self.store, self.format)?;
                Ok(Outcome::Completed)
            }
            None => self.interactive(input, out),
        }
    }

    /// Runs one calculation and renders the result.
    pub fn calculate(&self, request: CalculationRequest, out: &mut impl Write) -> CliResult<Outcome> {
        if self.format == OutputFormat::Text {
            render::request_summary(out, &request)?;
        }

        let result = self.calculator.execute(&request);
        info!(
            rebate = %request.rebate_identifier,
            product = %request.product_identifier,
            success = result.is_success(),
            "Calculation finished"
        );

        render::calculation(out, &request, &result, self.format)?;

        Ok(if result.is_success() {
            Outcome::Completed
        } else {
            Outcome::CalculationFailed
        })
    }

    /// Prompts for rebate, product and volume, then calculates.
    ///
    /// End of input reads as an empty answer.
    pub fn interactive(&self, input: &mut impl BufRead, out: &mut impl Write) -> CliResult<Outcome> {
        render::banner(out)?;
        writeln!(out, "💡 Tip: Use `rebate-calc list` to see available products and rebates")?;
        writeln!(out)?;

        let rebate = prompt(input, out, "Enter Rebate Identifier (e.g., REB001, SUMMER2024): ")?;
        let product = prompt(input, out, "Enter Product Identifier (e.g., PROD001, LAPTOP-X1): ")?;
        let volume = parse_volume(&prompt(input, out, "Enter Volume: ")?)?;
        writeln!(out)?;

        self.calculate(CalculationRequest::new(rebate, product, volume), out)
    }
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, question: &str) -> CliResult<String> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
