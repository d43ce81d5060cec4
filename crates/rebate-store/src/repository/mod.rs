//! # Repository Module
//!
//! In-memory repositories behind the rebate-core ports.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repositories and Ports                               │
//! │                                                                         │
//! │  RebateCalculator                                                      │
//! │       │                                                                 │
//! │       │  rebates.get("REB001")        sink.store(&rebate, amount)      │
//! │       ▼                                    ▼                            │
//! │  RebateRepository  ── RebateLookup    CalculationLog ── ResultSink     │
//! │  ProductRepository ── ProductLookup        │                            │
//! │       │                                    │                            │
//! │       ▼                                    ▼                            │
//! │  Keyed<T> (immutable, shared)         RwLock<Vec<StoredCalculation>>   │
//! │                                                                         │
//! │  Lookups are exact and case-sensitive: "reb001" is not "REB001".       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`RebateRepository`] - Rebate lookup and listing
//! - [`ProductRepository`] - Product lookup and listing
//! - [`CalculationLog`] - Append-only record of calculated amounts

pub mod calculation;
pub mod product;
pub mod rebate;

use std::collections::HashMap;

pub use calculation::{CalculationLog, StoredCalculation};
pub use product::ProductRepository;
pub use rebate::RebateRepository;

/// Records in catalog order with an identifier index.
#[derive(Debug)]
pub(crate) struct Keyed<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Keyed<T> {
    /// Indexes `records` by `key`. Callers have already rejected duplicates.
    pub(crate) fn new(records: Vec<T>, key: impl Fn(&T) -> &str) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(position, record)| (key(record).to_string(), position))
            .collect();
        Keyed { records, index }
    }

    pub(crate) fn get(&self, identifier: &str) -> Option<&T> {
        self.index
            .get(identifier)
            .and_then(|&position| self.records.get(position))
    }

    pub(crate) fn all(&self) -> &[T] {
        &self.records
    }
}
