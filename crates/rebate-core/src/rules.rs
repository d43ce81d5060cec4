//! # Calculation Rules
//!
//! One rule per incentive type. Each rule has an eligibility gate and an
//! amount formula.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule             Gate (after "product supports type")   Amount        │
//! │  ───────────────  ─────────────────────────────────────  ───────────── │
//! │  FixedCashAmount  amount ≠ 0                             amount        │
//! │  FixedRateRebate  percentage ≠ 0, price ≠ 0, volume ≠ 0  price × pct   │
//! │                                                          × volume      │
//! │  AmountPerUom     amount ≠ 0, volume ≠ 0                 amount        │
//! │                                                          × volume      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Supports type" is a set-membership test on the product. "Has a usable
//! value" is a zero-check on the rebate field that type actually reads, so
//! a rebate with the wrong field populated fails the gate instead of
//! producing a zero amount.
//!
//! The set of rules is closed: adding an incentive type means adding an
//! enum variant here, and the compiler points at every `match` to update.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CalculationRequest, IncentiveType, Product, Rebate};

/// Why a rule refused a (rebate, product, request) combination.
///
/// Only the first failing sub-condition is reported, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Ineligibility {
    #[error("product '{product}' does not support {incentive}")]
    IncentiveNotSupported {
        product: String,
        incentive: IncentiveType,
    },

    #[error("rebate '{rebate}' has a zero amount")]
    ZeroAmount { rebate: String },

    #[error("rebate '{rebate}' has a zero percentage")]
    ZeroPercentage { rebate: String },

    #[error("product '{product}' has a zero price")]
    ZeroPrice { product: String },

    #[error("requested volume is zero")]
    ZeroVolume,
}

/// A calculation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationRule {
    FixedCashAmount,
    FixedRateRebate,
    AmountPerUom,
}

impl CalculationRule {
    /// One rule for every incentive type.
    pub const ALL: [CalculationRule; 3] = [
        CalculationRule::FixedCashAmount,
        CalculationRule::FixedRateRebate,
        CalculationRule::AmountPerUom,
    ];

    /// The rule that handles `incentive`.
    pub const fn for_type(incentive: IncentiveType) -> Self {
        match incentive {
            IncentiveType::FixedCashAmount => CalculationRule::FixedCashAmount,
            IncentiveType::FixedRateRebate => CalculationRule::FixedRateRebate,
            IncentiveType::AmountPerUom => CalculationRule::AmountPerUom,
        }
    }

    /// The incentive type this rule declares.
    pub const fn supported_type(&self) -> IncentiveType {
        match self {
            CalculationRule::FixedCashAmount => IncentiveType::FixedCashAmount,
            CalculationRule::FixedRateRebate => IncentiveType::FixedRateRebate,
            CalculationRule::AmountPerUom => IncentiveType::AmountPerUom,
        }
    }

    /// Runs the eligibility gate and reports the first failing condition.
    ///
    /// ## Example
    /// ```rust
    /// use rebate_core::rules::{CalculationRule, Ineligibility};
    /// use rebate_core::types::{CalculationRequest, IncentiveType, Product, Rebate};
    /// use rust_decimal::Decimal;
    ///
    /// let rebate = Rebate::new("REB", IncentiveType::AmountPerUom).with_amount(Decimal::from(5));
    /// let product = Product::new("PROD", Decimal::from(50), "liters")
    ///     .supporting(IncentiveType::AmountPerUom);
    /// let request = CalculationRequest::new("REB", "PROD", Decimal::ZERO);
    ///
    /// let verdict = CalculationRule::AmountPerUom.check(&rebate, &product, &request);
    /// assert_eq!(verdict, Err(Ineligibility::ZeroVolume));
    /// ```
    pub fn check(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculationRequest,
    ) -> Result<(), Ineligibility> {
        let incentive = self.supported_type();
        if !product.supports(incentive) {
            return Err(Ineligibility::IncentiveNotSupported {
                product: product.identifier.clone(),
                incentive,
            });
        }

        match self {
            CalculationRule::FixedCashAmount => {
                require_amount(rebate)?;
            }
            CalculationRule::FixedRateRebate => {
                if rebate.percentage.is_zero() {
                    return Err(Ineligibility::ZeroPercentage {
                        rebate: rebate.identifier.clone(),
                    });
                }
                if product.price.is_zero() {
                    return Err(Ineligibility::ZeroPrice {
                        product: product.identifier.clone(),
                    });
                }
                require_volume(request)?;
            }
            CalculationRule::AmountPerUom => {
                require_amount(rebate)?;
                require_volume(request)?;
            }
        }

        Ok(())
    }

    /// Eligibility gate as a plain predicate.
    #[inline]
    pub fn is_eligible(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculationRequest,
    ) -> bool {
        self.check(rebate, product, request).is_ok()
    }

    /// Applies the amount formula.
    ///
    /// Only meaningful after [`is_eligible`](Self::is_eligible) returned
    /// true for the same inputs. No rounding is applied. `None` when the
    /// product does not fit in a `Decimal`.
    pub fn compute(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculationRequest,
    ) -> Option<Decimal> {
        match self {
            CalculationRule::FixedCashAmount => Some(rebate.amount),
            CalculationRule::FixedRateRebate => product
                .price
                .checked_mul(rebate.percentage)?
                .checked_mul(request.volume),
            CalculationRule::AmountPerUom => rebate.amount.checked_mul(request.volume),
        }
    }
}

fn require_amount(rebate: &Rebate) -> Result<(), Ineligibility> {
    if rebate.amount.is_zero() {
        return Err(Ineligibility::ZeroAmount {
            rebate: rebate.identifier.clone(),
        });
    }
    Ok(())
}

fn require_volume(request: &CalculationRequest) -> Result<(), Ineligibility> {
    if request.volume.is_zero() {
        return Err(Ineligibility::ZeroVolume);
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SupportedIncentives;
    use rust_decimal_macros::dec;

    fn product(price: Decimal, supports: IncentiveType) -> Product {
        Product::new("PROD", price, "units").supporting(supports)
    }

    fn request(volume: Decimal) -> CalculationRequest {
        CalculationRequest::new("REB", "PROD", volume)
    }

    #[test]
    fn test_rule_type_mapping_is_bijective() {
        for incentive in IncentiveType::ALL {
            assert_eq!(CalculationRule::for_type(incentive).supported_type(), incentive);
        }
        for rule in CalculationRule::ALL {
            assert_eq!(CalculationRule::for_type(rule.supported_type()), rule);
        }
    }

    // -------------------------------------------------------------------------
    // Fixed cash amount
    // -------------------------------------------------------------------------

    #[test]
    fn test_fixed_cash_ignores_volume_and_price() {
        let rule = CalculationRule::FixedCashAmount;
        let rebate = Rebate::new("REB", IncentiveType::FixedCashAmount).with_amount(dec!(50));

        for (price, volume) in [(dec!(100), dec!(10)), (dec!(0), dec!(1)), (dec!(3.5), dec!(-4))] {
            let product = product(price, IncentiveType::FixedCashAmount);
            let request = request(volume);
            assert!(rule.is_eligible(&rebate, &product, &request));
            assert_eq!(rule.compute(&rebate, &product, &request), Some(dec!(50)));
        }
    }

    #[test]
    fn test_fixed_cash_eligible_with_zero_volume() {
        let rule = CalculationRule::FixedCashAmount;
        let rebate = Rebate::new("REB", IncentiveType::FixedCashAmount).with_amount(dec!(50));
        let product = product(dec!(100), IncentiveType::FixedCashAmount);

        assert!(rule.is_eligible(&rebate, &product, &request(dec!(0))));
    }

    #[test]
    fn test_fixed_cash_zero_amount_is_ineligible() {
        let rule = CalculationRule::FixedCashAmount;
        // Percentage populated instead of amount: misconfigured for this type.
        let rebate = Rebate::new("REB", IncentiveType::FixedCashAmount).with_percentage(dec!(0.1));
        let product = product(dec!(100), IncentiveType::FixedCashAmount);

        assert_eq!(
            rule.check(&rebate, &product, &request(dec!(10))),
            Err(Ineligibility::ZeroAmount {
                rebate: "REB".to_string()
            })
        );
    }

    // -------------------------------------------------------------------------
    // Fixed rate rebate
    // -------------------------------------------------------------------------

    #[test]
    fn test_fixed_rate_formula() {
        let rule = CalculationRule::FixedRateRebate;
        let rebate = Rebate::new("REB", IncentiveType::FixedRateRebate).with_percentage(dec!(0.10));
        let product = product(dec!(100), IncentiveType::FixedRateRebate);
        let request = request(dec!(10));

        assert!(rule.is_eligible(&rebate, &product, &request));
        assert_eq!(rule.compute(&rebate, &product, &request), Some(dec!(100.00)));
    }

    #[test]
    fn test_fixed_rate_keeps_full_precision() {
        let rule = CalculationRule::FixedRateRebate;
        let rebate = Rebate::new("REB", IncentiveType::FixedRateRebate).with_percentage(dec!(0.15));
        let product = product(dec!(19.99), IncentiveType::FixedRateRebate);

        assert_eq!(
            rule.compute(&rebate, &product, &request(dec!(3))),
            Some(dec!(8.9955))
        );
    }

    #[test]
    fn test_fixed_rate_zero_checks_are_monotonic() {
        let rule = CalculationRule::FixedRateRebate;
        let rebate = Rebate::new("REB", IncentiveType::FixedRateRebate).with_percentage(dec!(0.2));
        let product = product(dec!(1200), IncentiveType::FixedRateRebate);
        let request = request(dec!(2));
        assert!(rule.is_eligible(&rebate, &product, &request));

        let zero_pct = rebate.clone().with_percentage(Decimal::ZERO);
        assert!(!rule.is_eligible(&zero_pct, &product, &request));

        let mut zero_price = product.clone();
        zero_price.price = Decimal::ZERO;
        assert_eq!(
            rule.check(&rebate, &zero_price, &request),
            Err(Ineligibility::ZeroPrice {
                product: "PROD".to_string()
            })
        );

        let zero_volume = CalculationRequest {
            volume: Decimal::ZERO,
            ..request.clone()
        };
        assert_eq!(
            rule.check(&rebate, &product, &zero_volume),
            Err(Ineligibility::ZeroVolume)
        );
    }

    // -------------------------------------------------------------------------
    // Amount per unit of measure
    // -------------------------------------------------------------------------

    #[test]
    fn test_amount_per_uom_formula() {
        let rule = CalculationRule::AmountPerUom;
        let rebate = Rebate::new("REB", IncentiveType::AmountPerUom).with_amount(dec!(5));
        let product = product(dec!(50), IncentiveType::AmountPerUom);
        let request = request(dec!(20));

        assert!(rule.is_eligible(&rebate, &product, &request));
        assert_eq!(rule.compute(&rebate, &product, &request), Some(dec!(100.00)));
    }

    #[test]
    fn test_amount_per_uom_ignores_price() {
        let rule = CalculationRule::AmountPerUom;
        let rebate = Rebate::new("REB", IncentiveType::AmountPerUom).with_amount(dec!(2.50));
        let product = product(Decimal::ZERO, IncentiveType::AmountPerUom);

        assert!(rule.is_eligible(&rebate, &product, &request(dec!(4))));
        assert_eq!(rule.compute(&rebate, &product, &request(dec!(4))), Some(dec!(10)));
    }

    #[test]
    fn test_amount_per_uom_zero_checks_are_monotonic() {
        let rule = CalculationRule::AmountPerUom;
        let rebate = Rebate::new("REB", IncentiveType::AmountPerUom).with_amount(dec!(5));
        let product = product(dec!(50), IncentiveType::AmountPerUom);

        assert!(rule.is_eligible(&rebate, &product, &request(dec!(1))));
        assert!(!rule.is_eligible(&rebate, &product, &request(dec!(0))));
        assert!(!rule.is_eligible(
            &rebate.clone().with_amount(Decimal::ZERO),
            &product,
            &request(dec!(1))
        ));
    }

    #[test]
    fn test_negative_volume_is_not_rejected() {
        let rule = CalculationRule::AmountPerUom;
        let rebate = Rebate::new("REB", IncentiveType::AmountPerUom).with_amount(dec!(5));
        let product = product(dec!(50), IncentiveType::AmountPerUom);
        let request = request(dec!(-2));

        assert!(rule.is_eligible(&rebate, &product, &request));
        assert_eq!(rule.compute(&rebate, &product, &request), Some(dec!(-10)));
    }

    #[test]
    fn test_compute_overflow_is_none() {
        let request = request(Decimal::MAX);

        let per_unit = Rebate::new("REB", IncentiveType::AmountPerUom).with_amount(dec!(5));
        let product_uom = product(dec!(50), IncentiveType::AmountPerUom);
        assert!(CalculationRule::AmountPerUom.is_eligible(&per_unit, &product_uom, &request));
        assert_eq!(
            CalculationRule::AmountPerUom.compute(&per_unit, &product_uom, &request),
            None
        );

        let rate = Rebate::new("REB", IncentiveType::FixedRateRebate).with_percentage(dec!(0.5));
        let product_rate = product(dec!(1200), IncentiveType::FixedRateRebate);
        assert_eq!(
            CalculationRule::FixedRateRebate.compute(&rate, &product_rate, &request),
            None
        );

        // Volume never enters the cash formula
        let cash = Rebate::new("REB", IncentiveType::FixedCashAmount).with_amount(dec!(50));
        let product_cash = product(dec!(100), IncentiveType::FixedCashAmount);
        assert_eq!(
            CalculationRule::FixedCashAmount.compute(&cash, &product_cash, &request),
            Some(dec!(50))
        );
    }

    // -------------------------------------------------------------------------
    // Product support
    // -------------------------------------------------------------------------

    #[test]
    fn test_unsupported_incentive_is_checked_first() {
        let rebate = Rebate::new("REB", IncentiveType::FixedRateRebate);
        let product = product(Decimal::ZERO, IncentiveType::AmountPerUom);

        assert_eq!(
            CalculationRule::FixedRateRebate.check(&rebate, &product, &request(dec!(0))),
            Err(Ineligibility::IncentiveNotSupported {
                product: "PROD".to_string(),
                incentive: IncentiveType::FixedRateRebate,
            })
        );
    }

    #[test]
    fn test_multi_support_product_is_eligible_for_each_rule() {
        let mut product = Product::new("LAPTOP-X1", dec!(1200), "units");
        product.supported_incentives = SupportedIncentives::all();
        let request = request(dec!(2));

        let cash = Rebate::new("C", IncentiveType::FixedCashAmount).with_amount(dec!(100));
        let rate = Rebate::new("R", IncentiveType::FixedRateRebate).with_percentage(dec!(0.2));
        let per_unit = Rebate::new("U", IncentiveType::AmountPerUom).with_amount(dec!(2.5));

        assert!(CalculationRule::FixedCashAmount.is_eligible(&cash, &product, &request));
        assert!(CalculationRule::FixedRateRebate.is_eligible(&rate, &product, &request));
        assert!(CalculationRule::AmountPerUom.is_eligible(&per_unit, &product, &request));
        assert_eq!(
            CalculationRule::FixedRateRebate.compute(&rate, &product, &request),
            Some(dec!(480))
        );
    }

    #[test]
    fn test_empty_support_set_rejects_every_rule() {
        let product = Product::new("BARE", dec!(10), "units");
        let rebate = Rebate::new("REB", IncentiveType::FixedCashAmount)
            .with_amount(dec!(1))
            .with_percentage(dec!(0.5));

        for rule in CalculationRule::ALL {
            assert!(!rule.is_eligible(&rebate, &product, &request(dec!(1))));
        }
    }
}
