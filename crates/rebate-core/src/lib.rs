//! # rebate-core: Pure Rebate Calculation Logic
//!
//! This crate is the **heart** of the rebate calculator. It picks a
//! calculation rule from a rebate's incentive type, checks that the rule
//! applies, computes the amount, and hands it to a sink. No I/O happens
//! here: records come in and results go out through the traits in
//! [`ports`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rebate Calc Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rebate-calc (apps/cli)                       │   │
//! │  │        calculate ──► list ──► interactive prompt                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rebate-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   rules   │  │ registry  │  │calculator │  │   │
//! │  │   │  Rebate   │  │ FixedCash │  │ type→rule │  │ execute() │  │   │
//! │  │   │  Product  │  │ FixedRate │  │           │  │           │  │   │
//! │  │   │  Result   │  │ PerUom    │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE RULES                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ports (RebateLookup, ProductLookup,    │
//! │                                │        ResultSink)                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 rebate-store (Catalog + Log)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Rebate, Product, request and result types
//! - [`rules`] - The three calculation rules
//! - [`registry`] - Incentive type → rule resolution
//! - [`calculator`] - The orchestrator (`RebateCalculator::execute`)
//! - [`ports`] - Collaborator traits for lookups and persistence
//! - [`validation`] - Record validation used when loading catalogs
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: every rule is deterministic - same input = same output
//! 2. **Exact Decimals**: amounts use `rust_decimal`, never floats
//! 3. **Errors as Results**: a calculation failure is a value, not a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use rebate_core::rules::CalculationRule;
//! use rebate_core::types::{CalculationRequest, IncentiveType, Product, Rebate};
//! use rust_decimal::Decimal;
//!
//! let rebate = Rebate::new("REB002", IncentiveType::FixedRateRebate)
//!     .with_percentage(Decimal::new(10, 2)); // 10%
//! let product = Product::new("PROD001", Decimal::from(100), "kg")
//!     .supporting(IncentiveType::FixedRateRebate);
//! let request = CalculationRequest::new("REB002", "PROD001", Decimal::from(10));
//!
//! let rule = CalculationRule::for_type(rebate.incentive);
//! assert!(rule.is_eligible(&rebate, &product, &request));
//! assert_eq!(rule.compute(&rebate, &product, &request), Some(Decimal::from(100)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod ports;
pub mod registry;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{RebateCalculator, RebateCalculatorBuilder};
pub use error::{CoreError, CoreResult, ErrorCode, ValidationError};
pub use ports::{ProductLookup, RebateLookup, ResultSink};
pub use registry::RuleRegistry;
pub use rules::{CalculationRule, Ineligibility};
pub use types::*;
