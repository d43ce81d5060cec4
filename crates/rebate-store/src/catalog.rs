//! # Catalog
//!
//! The set of rebate and product records a store is built from.
//!
//! ## File Format
//! ```text
//! {
//!   "rebates": [
//!     { "identifier": "REB001", "incentive": "fixed_cash_amount", "amount": "50.00" }
//!   ],
//!   "products": [
//!     { "identifier": "PROD001", "price": "100.00", "uom": "kg",
//!       "supported_incentives": ["fixed_cash_amount", "fixed_rate_rebate"] }
//!   ]
//! }
//! ```
//!
//! Missing `amount`, `percentage`, `uom` and `supported_incentives` fields
//! default to zero, zero, empty and none.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rebate_core::validation::{validate_product, validate_rebate};
use rebate_core::{IncentiveType, Product, Rebate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{StoreError, StoreResult};

/// Rebate and product records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub rebates: Vec<Rebate>,

    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Parses a catalog from JSON text. Records are not validated.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads, parses and validates a catalog file.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let catalog = Catalog::from_json_str(&json)?;
        catalog.validate()?;

        info!(
            path = %path.display(),
            rebates = catalog.rebates.len(),
            products = catalog.products.len(),
            "Loaded catalog"
        );

        Ok(catalog)
    }

    /// Writes the catalog as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| StoreError::io(path, e))
    }

    /// Validates every record and rejects repeated identifiers.
    ///
    /// Rebates and products live in separate key spaces, so a rebate and a
    /// product may share an identifier.
    pub fn validate(&self) -> StoreResult<()> {
        let mut seen = HashSet::new();
        for rebate in &self.rebates {
            validate_rebate(rebate).map_err(|source| StoreError::Validation {
                entity: "rebate",
                identifier: rebate.identifier.clone(),
                source,
            })?;
            if !seen.insert(rebate.identifier.as_str()) {
                return Err(StoreError::duplicate("rebate", &rebate.identifier));
            }
        }

        let mut seen = HashSet::new();
        for product in &self.products {
            validate_product(product).map_err(|source| StoreError::Validation {
                entity: "product",
                identifier: product.identifier.clone(),
                source,
            })?;
            if !seen.insert(product.identifier.as_str()) {
                return Err(StoreError::duplicate("product", &product.identifier));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Demo Dataset
// =============================================================================

/// The reference dataset used when no catalog file is configured.
///
/// ```text
/// PRODUCTS                                   REBATES
/// ─────────────────────────────────────      ─────────────────────────────────
/// PROD001    100.00 kg      cash rate uom    REB001         cash   50.00
/// PROD002    250.00 units        rate        REB002         rate   10%
/// PROD003     50.00 liters            uom    REB003         uom     5.00
/// PROD004    500.00 units   cash             REB004         rate   15%
/// LAPTOP-X1 1200.00 units   cash rate        REB005         cash  100.00
///                                            SUMMER2024     rate   20%
///                                            BULK-DISCOUNT  uom     2.50
/// ```
pub fn demo_catalog() -> Catalog {
    use IncentiveType::{AmountPerUom, FixedCashAmount, FixedRateRebate};

    let products = vec![
        Product::new("PROD001", Decimal::new(10000, 2), "kg")
            .supporting(FixedCashAmount)
            .supporting(FixedRateRebate)
            .supporting(AmountPerUom),
        Product::new("PROD002", Decimal::new(25000, 2), "units").supporting(FixedRateRebate),
        Product::new("PROD003", Decimal::new(5000, 2), "liters").supporting(AmountPerUom),
        Product::new("PROD004", Decimal::new(50000, 2), "units").supporting(FixedCashAmount),
        Product::new("LAPTOP-X1", Decimal::new(120000, 2), "units")
            .supporting(FixedCashAmount)
            .supporting(FixedRateRebate),
    ];

    let rebates = vec![
        Rebate::new("REB001", FixedCashAmount).with_amount(Decimal::new(5000, 2)),
        Rebate::new("REB002", FixedRateRebate).with_percentage(Decimal::new(10, 2)),
        Rebate::new("REB003", AmountPerUom).with_amount(Decimal::new(500, 2)),
        Rebate::new("REB004", FixedRateRebate).with_percentage(Decimal::new(15, 2)),
        Rebate::new("REB005", FixedCashAmount).with_amount(Decimal::new(10000, 2)),
        Rebate::new("SUMMER2024", FixedRateRebate).with_percentage(Decimal::new(20, 2)),
        Rebate::new("BULK-DISCOUNT", AmountPerUom).with_amount(Decimal::new(250, 2)),
    ];

    Catalog { rebates, products }
}

// =============================================================================
// Unit Tests
// =============================================================================
