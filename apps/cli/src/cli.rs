//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "rebate-calc",
    about = "Calculate rebate amounts for a rebate, a product and a volume",
    long_about = "Calculate rebate amounts for a rebate, a product and a volume.\n\n\
                  Run without a subcommand to be prompted for each value.",
    version
)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog JSON file (defaults to the built-in demo dataset)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Calculate one rebate amount
    Calculate(CalculateArgs),
    /// List the products and rebates in the active catalog
    List,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct CalculateArgs {
    /// Rebate identifier, e.g. REB001
    pub rebate: String,

    /// Product identifier, e.g. PROD001
    pub product: String,

    /// Volume as a decimal number, e.g. 10 or 2.5
    #[arg(allow_negative_numbers = true)]
    pub volume: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::try_parse_from(["rebate-calc", "calculate", "SUMMER2024", "LAPTOP-X1", "2"])
            .unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Calculate(CalculateArgs {
                rebate: "SUMMER2024".to_string(),
                product: "LAPTOP-X1".to_string(),
                volume: "2".to_string(),
                json: false,
            }))
        );
    }

    #[test]
    fn test_parse_negative_volume() {
        let cli =
            Cli::try_parse_from(["rebate-calc", "calculate", "REB003", "PROD003", "-2.5"]).unwrap();
        match cli.command {
            Some(Command::Calculate(args)) => assert_eq!(args.volume, "-2.5"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["rebate-calc", "list", "--catalog", "c.json"]).unwrap();
        assert_eq!(cli.command, Some(Command::List));
        assert_eq!(cli.catalog, Some(PathBuf::from("c.json")));
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["rebate-calc"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_calculate_requires_three_values() {
        assert!(Cli::try_parse_from(["rebate-calc", "calculate", "REB001", "PROD001"]).is_err());
    }
}
