//! # Validation Module
//!
//! Record validation for rebates and products.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI                                                          │
//! │  └── Volume must parse as a decimal                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog load (rebate-store)                                  │
//! │  └── THIS MODULE: identifiers, non-negative money, percentage range    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Rule eligibility gate (rules.rs)                             │
//! │  └── Zero checks on the fields each rule reads                         │
//! │                                                                         │
//! │  The calculator itself validates nothing: a bad record either never   │
//! │  loads, or fails its rule's eligibility gate.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::{Product, Rebate};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest identifier accepted for rebates and products.
pub const MAX_IDENTIFIER_LEN: usize = 64;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a rebate or product identifier.
///
/// ## Rules
/// - Must not be empty after trimming
/// - No leading or trailing whitespace (lookups are exact)
/// - At most [`MAX_IDENTIFIER_LEN`] characters
/// - Only letters, digits, hyphens and underscores
///
/// ## Example
/// ```rust
/// use rebate_core::validation::validate_identifier;
///
/// assert!(validate_identifier("SUMMER2024").is_ok());
/// assert!(validate_identifier("BULK-DISCOUNT").is_ok());
/// assert!(validate_identifier("").is_err());
/// assert!(validate_identifier("has space").is_err());
/// ```
pub fn validate_identifier(identifier: &str) -> ValidationResult<()> {
    if identifier.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "identifier".to_string(),
        });
    }

    if identifier.trim() != identifier {
        return Err(ValidationError::InvalidFormat {
            field: "identifier".to_string(),
            reason: "must not start or end with whitespace".to_string(),
        });
    }

    if identifier.chars().count() > MAX_IDENTIFIER_LEN {
        return Err(ValidationError::TooLong {
            field: "identifier".to_string(),
            max: MAX_IDENTIFIER_LEN,
        });
    }

    if !identifier
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "identifier".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates that a monetary value is not negative. Zero is allowed.
pub fn validate_non_negative(field: &str, value: Decimal) -> ValidationResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a rebate percentage expressed as a fraction.
///
/// ## Example
/// ```rust
/// use rebate_core::validation::validate_percentage;
/// use rust_decimal::Decimal;
///
/// assert!(validate_percentage(Decimal::new(10, 2)).is_ok());  // 0.10
/// assert!(validate_percentage(Decimal::ONE).is_ok());
/// assert!(validate_percentage(Decimal::new(15, 0)).is_err()); // 15, not 0.15
/// ```
pub fn validate_percentage(value: Decimal) -> ValidationResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: Decimal::ZERO,
            max: Decimal::ONE,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a full rebate record.
pub fn validate_rebate(rebate: &Rebate) -> ValidationResult<()> {
    validate_identifier(&rebate.identifier)?;
    validate_non_negative("amount", rebate.amount)?;
    validate_percentage(rebate.percentage)?;
    Ok(())
}

/// Validates a full product record.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_identifier(&product.identifier)?;
    validate_non_negative("price", product.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IncentiveType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("REB001").is_ok());
        assert!(validate_identifier("LAPTOP-X1").is_ok());
        assert!(validate_identifier("bulk_discount").is_ok());

        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("   ").is_err());
        assert!(validate_identifier("REB 001").is_err());
        assert!(validate_identifier("REB/001").is_err());
        assert!(validate_identifier(&"A".repeat(65)).is_err());
        assert!(validate_identifier(&"A".repeat(64)).is_ok());
    }

    #[test]
    fn test_validate_identifier_rejects_surrounding_whitespace() {
        for padded in [" R1", "R1 ", " R1 ", "R1\n", "\tR1"] {
            assert_eq!(
                validate_identifier(padded),
                Err(ValidationError::InvalidFormat {
                    field: "identifier".to_string(),
                    reason: "must not start or end with whitespace".to_string(),
                }),
                "{padded:?}"
            );
        }
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("price", dec!(0)).is_ok());
        assert!(validate_non_negative("price", dec!(-0)).is_ok());
        assert!(validate_non_negative("price", dec!(19.99)).is_ok());
        assert_eq!(
            validate_non_negative("price", dec!(-1)),
            Err(ValidationError::Negative {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage(dec!(0)).is_ok());
        assert!(validate_percentage(dec!(0.15)).is_ok());
        assert!(validate_percentage(dec!(1)).is_ok());
        assert!(validate_percentage(dec!(1.01)).is_err());
        assert!(validate_percentage(dec!(-0.1)).is_err());
    }

    #[test]
    fn test_validate_records() {
        let rebate = Rebate::new("REB001", IncentiveType::FixedCashAmount).with_amount(dec!(50));
        assert!(validate_rebate(&rebate).is_ok());
        assert!(validate_rebate(&rebate.clone().with_percentage(dec!(20))).is_err());
        assert!(validate_rebate(&rebate.with_amount(dec!(-5))).is_err());

        let product = Product::new("PROD001", dec!(100), "kg");
        assert!(validate_product(&product).is_ok());
        assert!(validate_product(&Product::new("", dec!(100), "kg")).is_err());
        assert!(validate_product(&Product::new("P", dec!(-100), "kg")).is_err());
    }
}
