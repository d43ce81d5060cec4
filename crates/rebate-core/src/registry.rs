//! # Rule Registry
//!
//! Maps an incentive type to the rule that calculates it.
//!
//! ```text
//! IncentiveType ──► RuleRegistry::resolve ──► CalculationRule
//!                         │
//!                         └── no rule declares the type
//!                               → CoreError::UnsupportedIncentiveType
//! ```

use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::rules::CalculationRule;
use crate::types::IncentiveType;

/// The set of rules a calculator may dispatch to.
///
/// Built once, read-only afterwards. Resolution is a pure function of
/// the configured rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRegistry {
    rules: Vec<CalculationRule>,
}

impl RuleRegistry {
    /// Builds a registry from any set of rules.
    ///
    /// Duplicates are kept but only the first one for a type is ever
    /// resolved. Use [`RuleRegistry::strict`] to reject them instead.
    pub fn new(rules: impl IntoIterator<Item = CalculationRule>) -> Self {
        let rules: Vec<CalculationRule> = rules.into_iter().collect();
        for (index, rule) in rules.iter().enumerate() {
            if rules[..index].contains(rule) {
                warn!(incentive = %rule.supported_type(), "Duplicate rule registered, first one wins");
            }
        }
        RuleRegistry { rules }
    }

    /// Builds a registry from an optional rule collection.
    ///
    /// An absent collection is a wiring error. An empty one is legal and
    /// makes every [`resolve`](Self::resolve) fail.
    pub fn try_new(rules: Option<Vec<CalculationRule>>) -> CoreResult<Self> {
        rules
            .map(RuleRegistry::new)
            .ok_or_else(|| CoreError::missing("rule collection"))
    }

    /// Builds a registry, rejecting two rules for the same incentive type.
    pub fn strict(rules: impl IntoIterator<Item = CalculationRule>) -> CoreResult<Self> {
        let mut accepted: Vec<CalculationRule> = Vec::new();
        for rule in rules {
            if accepted.contains(&rule) {
                return Err(CoreError::InvalidConfiguration(format!(
                    "more than one rule registered for incentive type '{}'",
                    rule.supported_type()
                )));
            }
            accepted.push(rule);
        }
        Ok(RuleRegistry { rules: accepted })
    }

    /// Registry with exactly one rule per incentive type.
    pub fn standard() -> Self {
        RuleRegistry {
            rules: CalculationRule::ALL.to_vec(),
        }
    }

    /// Finds the rule for `incentive`.
    ///
    /// ## Example
    /// ```rust
    /// use rebate_core::registry::RuleRegistry;
    /// use rebate_core::rules::CalculationRule;
    /// use rebate_core::types::IncentiveType;
    ///
    /// let registry = RuleRegistry::new([CalculationRule::FixedCashAmount]);
    /// assert!(registry.resolve(IncentiveType::FixedCashAmount).is_ok());
    /// assert!(registry.resolve(IncentiveType::AmountPerUom).is_err());
    /// ```
    pub fn resolve(&self, incentive: IncentiveType) -> CoreResult<CalculationRule> {
        self.rules
            .iter()
            .copied()
            .find(|rule| rule.supported_type() == incentive)
            .ok_or(CoreError::UnsupportedIncentiveType(incentive))
    }

    /// Incentive types this registry can resolve, in registration order.
    pub fn supported_types(&self) -> Vec<IncentiveType> {
        let mut types: Vec<IncentiveType> = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let incentive = rule.supported_type();
            if !types.contains(&incentive) {
                types.push(incentive);
            }
        }
        types
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        RuleRegistry::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_resolves_every_type() {
        let registry = RuleRegistry::standard();
        for incentive in IncentiveType::ALL {
            let rule = registry.resolve(incentive).unwrap();
            assert_eq!(rule.supported_type(), incentive);
        }
    }

    #[test]
    fn test_registration_order_does_not_matter() {
        let forward = RuleRegistry::new(CalculationRule::ALL);
        let backward = RuleRegistry::new(CalculationRule::ALL.into_iter().rev());

        for incentive in IncentiveType::ALL {
            assert_eq!(forward.resolve(incentive), backward.resolve(incentive));
        }
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let registry = RuleRegistry::standard();
        let first = registry.resolve(IncentiveType::FixedRateRebate);
        let second = registry.resolve(IncentiveType::FixedRateRebate);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_rule_is_unsupported() {
        let registry = RuleRegistry::new([CalculationRule::FixedCashAmount]);
        assert_eq!(
            registry.resolve(IncentiveType::AmountPerUom),
            Err(CoreError::UnsupportedIncentiveType(IncentiveType::AmountPerUom))
        );
    }

    #[test]
    fn test_empty_collection_is_legal_but_resolves_nothing() {
        let registry = RuleRegistry::try_new(Some(Vec::new())).unwrap();
        assert!(registry.is_empty());
        for incentive in IncentiveType::ALL {
            assert!(matches!(
                registry.resolve(incentive),
                Err(CoreError::UnsupportedIncentiveType(_))
            ));
        }
    }

    #[test]
    fn test_absent_collection_is_invalid_configuration() {
        assert!(matches!(
            RuleRegistry::try_new(None),
            Err(CoreError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_duplicates_first_match_wins() {
        let registry = RuleRegistry::new([
            CalculationRule::AmountPerUom,
            CalculationRule::AmountPerUom,
        ]);
        assert_eq!(
            registry.resolve(IncentiveType::AmountPerUom),
            Ok(CalculationRule::AmountPerUom)
        );
        assert_eq!(registry.supported_types(), vec![IncentiveType::AmountPerUom]);
    }

    #[test]
    fn test_strict_rejects_duplicates() {
        let result = RuleRegistry::strict([
            CalculationRule::FixedCashAmount,
            CalculationRule::FixedRateRebate,
            CalculationRule::FixedCashAmount,
        ]);
        assert!(matches!(result, Err(CoreError::InvalidConfiguration(_))));

        assert!(RuleRegistry::strict(CalculationRule::ALL).is_ok());
    }
}
