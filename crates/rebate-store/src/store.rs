//! # Store Handle
//!
//! Owns the loaded catalog and the calculation log, and hands out
//! repositories over them.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Lifecycle                                 │
//! │                                                                         │
//! │  CLI Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::load(path) or demo_catalog()                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::from_catalog(catalog) ← validate + index                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │              Store (Clone)              │                           │
//! │  │  Arc<Keyed<Rebate>>   ── rebates()      │                           │
//! │  │  Arc<Keyed<Product>>  ── products()     │                           │
//! │  │  CalculationLog       ── calculations() │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RebateCalculator::builder()                                           │
//! │      .rebates(store.rebates())                                         │
//! │      .products(store.products())                                       │
//! │      .sink(store.calculations())                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use rebate_core::{Product, Rebate};
use tracing::debug;

use crate::catalog::{demo_catalog, Catalog};
use crate::error::StoreResult;
use crate::repository::{CalculationLog, Keyed, ProductRepository, RebateRepository};

/// Shared handle over catalog records and the calculation log.
///
/// Cloning is cheap; every clone sees the same log.
#[derive(Debug, Clone)]
pub struct Store {
    rebates: Arc<Keyed<Rebate>>,
    products: Arc<Keyed<Product>>,
    calculations: CalculationLog,
}

impl Store {
    /// Validates `catalog` and builds a store over it.
    ///
    /// ## Errors
    /// - `StoreError::Validation` if a record has a bad field
    /// - `StoreError::DuplicateRecord` if an identifier repeats
    pub fn from_catalog(catalog: Catalog) -> StoreResult<Self> {
        catalog.validate()?;

        let Catalog { rebates, products } = catalog;
        debug!(
            rebates = rebates.len(),
            products = products.len(),
            "Building store"
        );

        Ok(Store {
            rebates: Arc::new(Keyed::new(rebates, |r: &Rebate| r.identifier.as_str())),
            products: Arc::new(Keyed::new(products, |p: &Product| p.identifier.as_str())),
            calculations: CalculationLog::new(),
        })
    }

    /// Store over the built-in demo dataset.
    pub fn demo() -> StoreResult<Self> {
        Store::from_catalog(demo_catalog())
    }

    /// Gets the rebate repository.
    pub fn rebates(&self) -> RebateRepository {
        RebateRepository::new(Arc::clone(&self.rebates))
    }

    /// Gets the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(Arc::clone(&self.products))
    }

    /// Gets the calculation log.
    pub fn calculations(&self) -> CalculationLog {
        self.calculations.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use rebate_core::{IncentiveType, ProductLookup, RebateLookup};
    use rust_decimal_macros::dec;

    #[test]
    fn test_demo_store_lookups() {
        let store = Store::demo().unwrap();

        let rebate = RebateLookup::get(&store.rebates(), "SUMMER2024").unwrap();
        assert_eq!(rebate.incentive, IncentiveType::FixedRateRebate);
        assert_eq!(rebate.percentage, dec!(0.20));

        let product = ProductLookup::get(&store.products(), "PROD003").unwrap();
        assert_eq!(product.price, dec!(50));
        assert!(product.supports(IncentiveType::AmountPerUom));
        assert!(!product.supports(IncentiveType::FixedRateRebate));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let store = Store::demo().unwrap();
        assert!(RebateLookup::get(&store.rebates(), "reb001").is_none());
        assert!(ProductLookup::get(&store.products(), "prod001").is_none());
        assert!(RebateLookup::get(&store.rebates(), "").is_none());
    }

    #[test]
    fn test_list_keeps_catalog_order() {
        let store = Store::demo().unwrap();
        let products = store.products();
        let ids: Vec<&str> = products
            .list()
            .iter()
            .map(|p| p.identifier.as_str())
            .collect();
        assert_eq!(ids, ["PROD001", "PROD002", "PROD003", "PROD004", "LAPTOP-X1"]);
        assert_eq!(store.rebates().count(), 7);
    }

    #[test]
    fn test_products_supporting() {
        let products = Store::demo().unwrap().products();
        let cash: Vec<&str> = products
            .supporting(IncentiveType::FixedCashAmount)
            .into_iter()
            .map(|p| p.identifier.as_str())
            .collect();
        assert_eq!(cash, ["PROD001", "PROD004", "LAPTOP-X1"]);
    }

    #[test]
    fn test_clones_share_calculation_log() {
        let store = Store::demo().unwrap();
        let other = store.clone();
        let rebate = store.rebates().get_by_identifier("REB001").unwrap().clone();

        other.calculations().record(&rebate, dec!(50)).unwrap();

        assert_eq!(store.calculations().len(), 1);
    }

    #[test]
    fn test_from_catalog_rejects_duplicates() {
        let mut catalog = demo_catalog();
        catalog.products.push(Product::new("PROD002", dec!(1), "units"));

        assert!(matches!(
            Store::from_catalog(catalog),
            Err(StoreError::DuplicateRecord { entity: "product", .. })
        ));
    }
}
