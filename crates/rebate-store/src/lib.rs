//! # rebate-store: Catalog and Calculation Log for Rebate Calc
//!
//! This crate provides the records the rebate calculator reads and the log
//! it writes to. Everything lives in memory; catalogs are loaded from JSON
//! or taken from the built-in demo dataset.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Rebate Calc Data Flow                             │
//! │                                                                         │
//! │  rebate-calc calculate REB001 PROD001 10                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   rebate-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Catalog    │    │  Repositories │    │    Store     │  │   │
//! │  │   │ (catalog.rs)  │    │ (repository/) │    │  (store.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ JSON load     │───►│ RebateRepo    │◄───│ Arc handles  │  │   │
//! │  │   │ validate()    │    │ ProductRepo   │    │ Clone        │  │   │
//! │  │   │ demo dataset  │    │ CalculationLog│    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rebate-core ports: RebateLookup, ProductLookup, ResultSink            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Catalog files and the demo dataset
//! - [`store`] - The shared `Store` handle
//! - [`repository`] - Repository implementations (rebate, product, calculation log)
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use rebate_core::{CalculationRequest, RebateCalculator, RuleRegistry};
//! use rebate_store::Store;
//! use rust_decimal::Decimal;
//!
//! let store = Store::demo().unwrap();
//! let calculator = RebateCalculator::builder()
//!     .rebates(store.rebates())
//!     .products(store.products())
//!     .registry(RuleRegistry::standard())
//!     .sink(store.calculations())
//!     .build()
//!     .unwrap();
//!
//! let result = calculator.execute(&CalculationRequest::new("REB001", "PROD001", Decimal::from(10)));
//! assert_eq!(result.calculated_amount(), Some(Decimal::from(50)));
//! assert_eq!(store.calculations().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{demo_catalog, Catalog};
pub use error::{StoreError, StoreResult};
pub use store::Store;

// Repository re-exports for convenience
pub use repository::{
    CalculationLog, ProductRepository, RebateRepository, StoredCalculation,
};
