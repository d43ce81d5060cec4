//! # Collaborator Ports
//!
//! The calculator never touches storage directly. It talks to these three
//! traits, and the embedding application decides what sits behind them
//! (the in-memory store in `rebate-store`, a database, a test double).
//!
//! ```text
//!                    ┌──────────────────┐
//!  RebateLookup ────►│                  │
//!  ProductLookup ───►│ RebateCalculator │────► ResultSink
//!                    │                  │
//!                    └──────────────────┘
//! ```
//!
//! Implementations must be safe to share across threads; the calculator
//! itself adds no locking.

use rust_decimal::Decimal;

use crate::error::CoreResult;
use crate::types::{Product, Rebate};

/// Key-value lookup for rebate records.
#[cfg_attr(test, mockall::automock)]
pub trait RebateLookup: Send + Sync {
    /// Returns the rebate with this identifier, if any.
    fn get(&self, identifier: &str) -> Option<Rebate>;
}

/// Key-value lookup for product records.
#[cfg_attr(test, mockall::automock)]
pub trait ProductLookup: Send + Sync {
    /// Returns the product with this identifier, if any.
    fn get(&self, identifier: &str) -> Option<Product>;
}

/// Destination for computed rebate amounts.
///
/// The calculator logs and ignores an `Err` from `store`; a successful
/// calculation is reported even when persisting it failed.
#[cfg_attr(test, mockall::automock)]
pub trait ResultSink: Send + Sync {
    fn store(&self, rebate: &Rebate, amount: Decimal) -> CoreResult<()>;
}
