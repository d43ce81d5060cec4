//! # Error Types
//!
//! Domain-specific error types for rebate-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rebate-core errors (this file)                                        │
//! │  ├── CoreError        - Calculation and wiring failures                │
//! │  └── ValidationError  - Record/input validation failures               │
//! │                                                                         │
//! │  rebate-store errors (separate crate)                                  │
//! │  └── StoreError       - Catalog loading and log failures               │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - Config, parsing, rendering                     │
//! │                                                                         │
//! │  Per-request errors never escape: RebateCalculator::execute turns      │
//! │  them into a failed CalculationResult carrying an ErrorCode.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::IncentiveType;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No rebate record matches the requested identifier.
    #[error("Rebate '{0}' not found.")]
    RebateNotFound(String),

    /// No product record matches the requested identifier.
    #[error("Product '{0}' not found.")]
    ProductNotFound(String),

    /// No registered rule declares the rebate's incentive type.
    ///
    /// ## When This Occurs
    /// - The registry was built without the matching rule
    /// - The registry was built from an empty rule set
    #[error("Incentive type not supported: Incentive type '{0}' is not supported.")]
    UnsupportedIncentiveType(IncentiveType),

    /// The resolved rule's eligibility gate rejected the inputs.
    ///
    /// The failing sub-condition is not carried here;
    /// use `CalculationRule::check` for a breakdown.
    #[error("Rebate calculation validation failed. Check rebate and product compatibility.")]
    ValidationFailed,

    /// The rule's formula produced a value outside the `Decimal` range.
    ///
    /// ## When This Occurs
    /// - A very large volume multiplied by the rebate's amount or rate
    #[error("Rebate amount is outside the supported numeric range. Check the requested volume.")]
    AmountOverflow,

    /// Wiring-time failure (missing collaborator, duplicate rule, ...).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A result sink could not store a computed amount.
    #[error("Failed to persist calculation result: {0}")]
    Persistence(String),
}

impl CoreError {
    /// Machine-readable code for errors that surface in a `CalculationResult`.
    ///
    /// ```text
    /// RebateNotFound / ProductNotFound  → NOT_FOUND
    /// UnsupportedIncentiveType          → UNSUPPORTED_INCENTIVE_TYPE
    /// ValidationFailed / AmountOverflow → VALIDATION_FAILED
    /// anything else                     → INTERNAL
    /// ```
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::RebateNotFound(_) | CoreError::ProductNotFound(_) => ErrorCode::NotFound,
            CoreError::UnsupportedIncentiveType(_) => ErrorCode::UnsupportedIncentiveType,
            CoreError::ValidationFailed | CoreError::AmountOverflow => ErrorCode::ValidationFailed,
            CoreError::InvalidConfiguration(_) | CoreError::Persistence(_) => ErrorCode::Internal,
        }
    }

    /// Shorthand for a missing-collaborator configuration error.
    pub fn missing(collaborator: &str) -> Self {
        CoreError::InvalidConfiguration(format!("{collaborator} is required"))
    }
}

/// Error codes carried by failed calculation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Rebate or product identifier has no matching record.
    NotFound,

    /// No rule for the rebate's incentive type.
    UnsupportedIncentiveType,

    /// The rule's eligibility gate rejected the input combination.
    ValidationFailed,

    /// Anything that is not a per-request failure.
    Internal,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when catalog records are checked before they reach the
/// calculator. The calculator itself never validates its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: Decimal,
        max: Decimal,
    },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., forbidden characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
