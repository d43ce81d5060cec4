//! # Output Rendering
//!
//! Everything the CLI prints to stdout goes through here, so it can be
//! tested against an in-memory buffer.
//!
//! ```text
//! ═══════════════════════════════════════
//! ✅ Rebate calculation SUCCEEDED
//!
//! 💰 Calculated Rebate Amount: $480.00
//! 📊 Calculation Details:
//!    - Rebate: SUMMER2024
//!    - Product: LAPTOP-X1
//!    - Volume: 2
//! ═══════════════════════════════════════
//! ```

use std::io::Write;

use rebate_core::{CalculationRequest, CalculationResult, Product, Rebate};
use rebate_store::{Catalog, Store};
use rust_decimal::Decimal;

use crate::config::OutputFormat;
use crate::error::CliResult;

const RULE_HEAVY: &str = "═══════════════════════════════════════";
const RULE_LIGHT: &str = "───────────────────────────────────────";

/// Example invocations against the demo dataset.
const EXAMPLES: &[(&str, &str, &str)] = &[
    ("💰 Fixed Cash Amount", "REB001 PROD001 10", "$50.00 (fixed amount)"),
    ("📊 Fixed Rate Rebate", "REB002 PROD001 10", "$100.00 (10% of $100 × 10 units)"),
    ("📦 Amount Per UOM", "REB003 PROD003 20", "$100.00 ($5 × 20 units)"),
    ("🎁 Summer Discount", "SUMMER2024 LAPTOP-X1 2", "$480.00 (20% of $1200 × 2 units)"),
];

/// Formats a money amount with two decimal places.
pub fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Formats a fraction as a whole-or-decimal percentage (0.15 → "15%").
pub fn percent(fraction: Decimal) -> String {
    format!("{}%", (fraction * Decimal::ONE_HUNDRED).normalize())
}

pub fn banner(out: &mut impl Write) -> CliResult<()> {
    writeln!(out, "╔════════════════════════════════════════╗")?;
    writeln!(out, "║  Rebate Calculator                     ║")?;
    writeln!(out, "╚════════════════════════════════════════╝")?;
    writeln!(out)?;
    Ok(())
}

/// Echoes the request before it runs.
pub fn request_summary(out: &mut impl Write, request: &CalculationRequest) -> CliResult<()> {
    writeln!(out, "{}", RULE_LIGHT)?;
    writeln!(out, "🔖 Rebate ID: {}", request.rebate_identifier)?;
    writeln!(out, "📦 Product ID: {}", request.product_identifier)?;
    writeln!(out, "📊 Volume: {}", request.volume)?;
    writeln!(out, "{}", RULE_LIGHT)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the outcome of one calculation.
pub fn calculation(
    out: &mut impl Write,
    request: &CalculationRequest,
    result: &CalculationResult,
    format: OutputFormat,
) -> CliResult<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, result)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", RULE_HEAVY)?;
    match result.calculated_amount() {
        Some(amount) => {
            writeln!(out, "✅ Rebate calculation SUCCEEDED")?;
            writeln!(out)?;
            writeln!(out, "💰 Calculated Rebate Amount: {}", money(amount))?;
            writeln!(out, "📊 Calculation Details:")?;
            writeln!(out, "   - Rebate: {}", request.rebate_identifier)?;
            writeln!(out, "   - Product: {}", request.product_identifier)?;
            writeln!(out, "   - Volume: {}", request.volume)?;
        }
        None => {
            writeln!(out, "❌ Rebate calculation FAILED")?;
            writeln!(out)?;
            writeln!(out, "📝 Error Details:")?;
            writeln!(out, "   {}", result.error_message().unwrap_or("unknown error"))?;
            writeln!(out)?;
            writeln!(out, "💡 Suggestions:")?;
            writeln!(out, "   - Use `rebate-calc list` to see valid products and rebates")?;
            writeln!(out, "   - Ensure the product supports the rebate incentive type")?;
            writeln!(out, "   - Check that all values are greater than zero")?;
        }
    }
    writeln!(out, "{}", RULE_HEAVY)?;
    Ok(())
}

/// Writes the active catalog.
pub fn catalog(out: &mut impl Write, store: &Store, format: OutputFormat) -> CliResult<()> {
    let rebates = store.rebates();
    let products = store.products();

    if format == OutputFormat::Json {
        let snapshot = Catalog {
            rebates: rebates.list().to_vec(),
            products: products.list().to_vec(),
        };
        serde_json::to_writer_pretty(&mut *out, &snapshot)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "=== Available Products ===")?;
    for product in products.list() {
        product_entry(out, product)?;
    }

    writeln!(out, "=== Available Rebates ===")?;
    for rebate in rebates.list() {
        rebate_entry(out, rebate)?;
    }

    writeln!(out, "{}", RULE_HEAVY)?;
    writeln!(out, "Example Commands:")?;
    writeln!(out, "{}", RULE_HEAVY)?;
    writeln!(out)?;
    for (title, args, expected) in EXAMPLES {
        writeln!(out, "{}:", title)?;
        writeln!(out, "   rebate-calc calculate {}", args)?;
        writeln!(out, "   Expected: {}", expected)?;
        writeln!(out)?;
    }
    Ok(())
}

fn product_entry(out: &mut impl Write, product: &Product) -> CliResult<()> {
    writeln!(out, "ID: {}", product.identifier)?;
    writeln!(out, "  Price: {}", money(product.price))?;
    writeln!(out, "  UOM: {}", product.uom)?;
    writeln!(out, "  Supported Incentives: {}", product.supported_incentives)?;
    writeln!(out)?;
    Ok(())
}

fn rebate_entry(out: &mut impl Write, rebate: &Rebate) -> CliResult<()> {
    writeln!(out, "ID: {}", rebate.identifier)?;
    writeln!(out, "  Type: {}", rebate.incentive)?;
    if rebate.amount > Decimal::ZERO {
        writeln!(out, "  Amount: {}", money(rebate.amount))?;
    }
    if rebate.percentage > Decimal::ZERO {
        writeln!(out, "  Percentage: {}", percent(rebate.percentage))?;
    }
    writeln!(out)?;
    Ok(())
}
