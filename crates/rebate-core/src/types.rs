//! # Domain Types
//!
//! Core domain types used throughout the rebate calculator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │     Rebate      │   │      Product        │   │ IncentiveType   │   │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │   │
//! │  │  identifier     │   │  identifier         │   │  FixedRate      │   │
//! │  │  incentive      │   │  price              │   │  AmountPerUom   │   │
//! │  │  amount         │   │  uom                │   │  FixedCash      │   │
//! │  │  percentage     │   │  supported_incent.  │   └─────────────────┘   │
//! │  └─────────────────┘   └─────────────────────┘                          │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────┐                     │
//! │  │ CalculationRequest  │   │ CalculationResult   │                     │
//! │  │  ─────────────────  │   │  ─────────────────  │                     │
//! │  │  rebate_identifier  │   │  success            │                     │
//! │  │  product_identifier │   │  calculated_amount  │                     │
//! │  │  volume             │   │  error_message/code │                     │
//! │  └─────────────────────┘   └─────────────────────┘                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rebates and products are owned by whatever store loaded them; the core
//! only ever borrows them for the duration of one calculation.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ErrorCode, ValidationError};

// =============================================================================
// Incentive Type
// =============================================================================

/// The category of rebate calculation a rebate offer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveType {
    /// `price × percentage × volume`
    FixedRateRebate,
    /// `amount × volume`
    AmountPerUom,
    /// `amount`, whatever the volume
    FixedCashAmount,
}

impl IncentiveType {
    /// Every incentive type, in declaration order.
    pub const ALL: [IncentiveType; 3] = [
        IncentiveType::FixedRateRebate,
        IncentiveType::AmountPerUom,
        IncentiveType::FixedCashAmount,
    ];

    /// Stable snake_case name (same as the serde representation).
    pub const fn as_str(&self) -> &'static str {
        match self {
            IncentiveType::FixedRateRebate => "fixed_rate_rebate",
            IncentiveType::AmountPerUom => "amount_per_uom",
            IncentiveType::FixedCashAmount => "fixed_cash_amount",
        }
    }

    const fn bit(&self) -> u8 {
        match self {
            IncentiveType::FixedRateRebate => 0b001,
            IncentiveType::AmountPerUom => 0b010,
            IncentiveType::FixedCashAmount => 0b100,
        }
    }
}

impl fmt::Display for IncentiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncentiveType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "fixed_rate_rebate" | "fixedraterebate" | "rate" | "percentage" => {
                Ok(IncentiveType::FixedRateRebate)
            }
            "amount_per_uom" | "amountperuom" | "amount_per_unit" | "per_unit" => {
                Ok(IncentiveType::AmountPerUom)
            }
            "fixed_cash_amount" | "fixedcashamount" | "cash" => Ok(IncentiveType::FixedCashAmount),
            other => Err(ValidationError::InvalidFormat {
                field: "incentive type".to_string(),
                reason: format!(
                    "unknown incentive type '{other}'. Valid options: fixed_rate_rebate, amount_per_uom, fixed_cash_amount"
                ),
            }),
        }
    }
}

// =============================================================================
// Supported Incentives
// =============================================================================

/// Set of incentive types a product accepts.
///
/// ## Why Flags?
/// A product may legitimately support several incentive types at once
/// (e.g. a laptop eligible for both cash-back and percentage rebates).
/// Eligibility only ever asks "does the set contain X?", so a bit set is
/// enough and keeps `Product` cheap to clone.
///
/// Serializes as a list: `["fixed_cash_amount", "fixed_rate_rebate"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<IncentiveType>", into = "Vec<IncentiveType>")]
pub struct SupportedIncentives(u8);

impl SupportedIncentives {
    /// Supports nothing.
    #[inline]
    pub const fn empty() -> Self {
        SupportedIncentives(0)
    }

    /// Supports every incentive type.
    pub fn all() -> Self {
        IncentiveType::ALL.into_iter().collect()
    }

    /// Supports exactly one incentive type.
    #[inline]
    pub const fn only(incentive: IncentiveType) -> Self {
        SupportedIncentives(incentive.bit())
    }

    /// Returns a copy that also supports `incentive`.
    #[inline]
    pub const fn with(self, incentive: IncentiveType) -> Self {
        SupportedIncentives(self.0 | incentive.bit())
    }

    /// Adds `incentive` in place.
    #[inline]
    pub fn insert(&mut self, incentive: IncentiveType) {
        self.0 |= incentive.bit();
    }

    /// Containment query used by every eligibility gate.
    #[inline]
    pub const fn contains(&self, incentive: IncentiveType) -> bool {
        self.0 & incentive.bit() != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the contained types in `IncentiveType::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = IncentiveType> + '_ {
        IncentiveType::ALL
            .into_iter()
            .filter(move |incentive| self.contains(*incentive))
    }
}

impl From<IncentiveType> for SupportedIncentives {
    fn from(incentive: IncentiveType) -> Self {
        SupportedIncentives::only(incentive)
    }
}

impl FromIterator<IncentiveType> for SupportedIncentives {
    fn from_iter<I: IntoIterator<Item = IncentiveType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SupportedIncentives::empty(), SupportedIncentives::with)
    }
}

impl From<Vec<IncentiveType>> for SupportedIncentives {
    fn from(incentives: Vec<IncentiveType>) -> Self {
        incentives.into_iter().collect()
    }
}

impl From<SupportedIncentives> for Vec<IncentiveType> {
    fn from(supported: SupportedIncentives) -> Self {
        supported.iter().collect()
    }
}

impl fmt::Display for SupportedIncentives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(|incentive| incentive.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}

// =============================================================================
// Rebate
// =============================================================================

/// A rebate offer.
///
/// `amount` and `percentage` are both always present; which one matters
/// depends on `incentive`. A rebate with the wrong field populated fails
/// eligibility instead of computing a zero amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rebate {
    /// Business identifier (unique key), e.g. "REB001".
    pub identifier: String,

    /// Which calculation rule applies.
    pub incentive: IncentiveType,

    /// Cash amount (FixedCashAmount) or per-unit amount (AmountPerUom).
    #[serde(default)]
    pub amount: Decimal,

    /// Fraction in [0, 1] used by FixedRateRebate (0.10 = 10%).
    #[serde(default)]
    pub percentage: Decimal,
}

impl Rebate {
    /// Creates a rebate with both value fields set to zero.
    pub fn new(identifier: impl Into<String>, incentive: IncentiveType) -> Self {
        Rebate {
            identifier: identifier.into(),
            incentive,
            amount: Decimal::ZERO,
            percentage: Decimal::ZERO,
        }
    }

    /// Sets the amount field.
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the percentage field.
    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = percentage;
        self
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product rebates can apply to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier (unique key), e.g. "PROD001".
    pub identifier: String,

    /// Unit price.
    pub price: Decimal,

    /// Unit of measure ("kg", "units", ...). Informational only.
    #[serde(default)]
    pub uom: String,

    /// Incentive types this product accepts.
    #[serde(default)]
    pub supported_incentives: SupportedIncentives,
}

impl Product {
    /// Creates a product that supports no incentive types yet.
    pub fn new(identifier: impl Into<String>, price: Decimal, uom: impl Into<String>) -> Self {
        Product {
            identifier: identifier.into(),
            price,
            uom: uom.into(),
            supported_incentives: SupportedIncentives::empty(),
        }
    }

    /// Adds an incentive type to the supported set.
    pub fn supporting(mut self, incentive: IncentiveType) -> Self {
        self.supported_incentives.insert(incentive);
        self
    }

    /// Checks if this product accepts the given incentive type.
    #[inline]
    pub fn supports(&self, incentive: IncentiveType) -> bool {
        self.supported_incentives.contains(incentive)
    }
}

// =============================================================================
// Calculation Request
// =============================================================================

/// One "how much rebate?" question. Created per call, never stored.
///
/// `volume` is not validated: zero makes volume-sensitive rules
/// ineligible, and a negative volume yields a negative amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub rebate_identifier: String,
    pub product_identifier: String,
    pub volume: Decimal,
}

impl CalculationRequest {
    pub fn new(
        rebate_identifier: impl Into<String>,
        product_identifier: impl Into<String>,
        volume: Decimal,
    ) -> Self {
        CalculationRequest {
            rebate_identifier: rebate_identifier.into(),
            product_identifier: product_identifier.into(),
            volume,
        }
    }
}

// =============================================================================
// Calculation Result
// =============================================================================

/// Outcome of one calculation.
///
/// ## Invariant
/// `success == true` ⇔ `calculated_amount.is_some()` ⇔
/// `error_message.is_none()`. Fields are private and the only
/// constructors are [`CalculationResult::success`] and
/// [`CalculationResult::failure`], so the invariant always holds.
///
/// ## Serialization
/// ```json
/// { "success": true, "calculatedAmount": "100.00" }
/// { "success": false, "errorMessage": "Rebate 'X' not found.", "errorCode": "NOT_FOUND" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    calculated_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<ErrorCode>,
}

impl CalculationResult {
    /// A successful calculation.
    pub fn success(amount: Decimal) -> Self {
        CalculationResult {
            success: true,
            calculated_amount: Some(amount),
            error_message: None,
            error_code: None,
        }
    }

    /// A failed calculation, described by the error that stopped it.
    pub fn failure(error: &CoreError) -> Self {
        CalculationResult {
            success: false,
            calculated_amount: None,
            error_message: Some(error.to_string()),
            error_code: Some(error.code()),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.success
    }

    #[inline]
    pub fn calculated_amount(&self) -> Option<Decimal> {
        self.calculated_amount
    }

    #[inline]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    #[inline]
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error_code
    }
}

impl From<Result<Decimal, CoreError>> for CalculationResult {
    fn from(outcome: Result<Decimal, CoreError>) -> Self {
        match outcome {
            Ok(amount) => CalculationResult::success(amount),
            Err(error) => CalculationResult::failure(&error),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_incentive_type_parsing() {
        assert_eq!(
            "fixed_cash_amount".parse::<IncentiveType>().unwrap(),
            IncentiveType::FixedCashAmount
        );
        assert_eq!("cash".parse::<IncentiveType>().unwrap(), IncentiveType::FixedCashAmount);
        assert_eq!(
            "Fixed-Rate-Rebate".parse::<IncentiveType>().unwrap(),
            IncentiveType::FixedRateRebate
        );
        assert_eq!("per_unit".parse::<IncentiveType>().unwrap(), IncentiveType::AmountPerUom);
        assert!("bogus".parse::<IncentiveType>().is_err());
    }

    #[test]
    fn test_incentive_type_display_matches_serde() {
        for incentive in IncentiveType::ALL {
            let json = serde_json::to_string(&incentive).unwrap();
            assert_eq!(json, format!("\"{incentive}\""));
        }
    }

    #[test]
    fn test_supported_incentives_containment() {
        let supported = SupportedIncentives::only(IncentiveType::FixedCashAmount)
            .with(IncentiveType::FixedRateRebate);

        assert!(supported.contains(IncentiveType::FixedCashAmount));
        assert!(supported.contains(IncentiveType::FixedRateRebate));
        assert!(!supported.contains(IncentiveType::AmountPerUom));
        assert!(SupportedIncentives::empty().is_empty());
        assert!(IncentiveType::ALL
            .iter()
            .all(|incentive| SupportedIncentives::all().contains(*incentive)));
    }

    #[test]
    fn test_supported_incentives_serializes_as_list() {
        let supported: SupportedIncentives =
            [IncentiveType::FixedCashAmount, IncentiveType::AmountPerUom]
                .into_iter()
                .collect();
        let json = serde_json::to_string(&supported).unwrap();
        assert_eq!(json, r#"["amount_per_uom","fixed_cash_amount"]"#);

        let parsed: SupportedIncentives = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, supported);
    }

    #[test]
    fn test_supported_incentives_display() {
        assert_eq!(SupportedIncentives::empty().to_string(), "none");
        assert_eq!(
            SupportedIncentives::only(IncentiveType::FixedRateRebate).to_string(),
            "fixed_rate_rebate"
        );
    }

    #[test]
    fn test_product_deserialize_defaults() {
        let product: Product =
            serde_json::from_str(r#"{ "identifier": "P1", "price": "12.50" }"#).unwrap();
        assert_eq!(product.price, dec!(12.50));
        assert!(product.supported_incentives.is_empty());
        assert!(product.uom.is_empty());
    }

    #[test]
    fn test_result_invariant() {
        let ok = CalculationResult::success(dec!(100.00));
        assert!(ok.is_success());
        assert_eq!(ok.calculated_amount(), Some(dec!(100.00)));
        assert!(ok.error_message().is_none());
        assert!(ok.error_code().is_none());

        let failed = CalculationResult::failure(&CoreError::ValidationFailed);
        assert!(!failed.is_success());
        assert!(failed.calculated_amount().is_none());
        assert!(failed.error_message().is_some());
        assert_eq!(failed.error_code(), Some(ErrorCode::ValidationFailed));
    }

    #[test]
    fn test_result_serialization() {
        let ok = serde_json::to_value(CalculationResult::success(dec!(100.00))).unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["calculatedAmount"], "100.00");
        assert!(ok.get("errorMessage").is_none());

        let failed = serde_json::to_value(CalculationResult::failure(
            &CoreError::RebateNotFound("X".to_string()),
        ))
        .unwrap();
        assert_eq!(failed["success"], false);
        assert_eq!(failed["errorCode"], "NOT_FOUND");
        assert!(failed.get("calculatedAmount").is_none());
    }
}
