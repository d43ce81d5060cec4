//! # Seed Catalog Generator
//!
//! Writes the demo dataset to a JSON catalog file that `rebate-calc
//! --catalog` can load and users can edit.
//!
//! ## Usage
//! ```bash
//! # Write ./catalog.json (default)
//! cargo run -p rebate-store --bin seed
//!
//! # Choose the output path
//! cargo run -p rebate-store --bin seed -- --out ./data/catalog.json
//!
//! # Replace an existing file
//! cargo run -p rebate-store --bin seed -- --out ./catalog.json --force
//! ```

use std::env;
use std::path::Path;
use std::process::ExitCode;

use rebate_store::{demo_catalog, Catalog};

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Help,
    Seed { out_path: String, force: bool },
}

fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut out_path = String::from("catalog.json");
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            flag @ ("--out" | "-o") => match args.get(i + 1) {
                Some(path) if !path.starts_with('-') => {
                    out_path = path.clone();
                    i += 1;
                }
                _ => return Err(format!("{} requires a path", flag)),
            },
            "--force" | "-f" => force = true,
            "--help" | "-h" => return Ok(Invocation::Help),
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    Ok(Invocation::Seed { out_path, force })
}

fn print_help() {
    println!("Rebate Calc Seed Catalog Generator");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -o, --out <PATH>   Catalog file to write (default: catalog.json)");
    println!("  -f, --force        Overwrite an existing file");
    println!("  -h, --help         Show this help message");
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let (out_path, force) = match parse_args(&args) {
        Ok(Invocation::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Seed { out_path, force }) => (out_path, force),
        Err(message) => {
            eprintln!("✗ {}", message);
            eprintln!("  Run with --help for usage.");
            return ExitCode::from(2);
        }
    };

    match seed(&out_path, force) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("✗ Seed failed: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn seed(out_path: &str, force: bool) -> Result<(), Box<dyn std::error::Error>> {

    println!("🌱 Rebate Calc Seed Catalog Generator");
    println!("=====================================");
    println!("Output: {}", out_path);
    println!();

    if Path::new(out_path).exists() && !force {
        println!("⚠ {} already exists", out_path);
        println!("  Skipping seed to avoid overwriting edits.");
        println!("  Pass --force to replace it.");
        return Ok(());
    }

    let catalog = demo_catalog();
    catalog.save(out_path)?;

    println!(
        "✓ Wrote {} products and {} rebates",
        catalog.products.len(),
        catalog.rebates.len()
    );

    // Verify the file loads back through the same path the CLI uses
    let reloaded = Catalog::load(out_path)?;
    if reloaded != catalog {
        return Err("written catalog does not match the demo dataset".into());
    }
    println!("✓ Catalog reloads cleanly");

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
