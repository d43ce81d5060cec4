//! # Calculation Log
//!
//! Append-only record of every amount the calculator persisted.
//!
//! ```text
//! RebateCalculator::execute
//!       │ success
//!       ▼
//! ResultSink::store(&rebate, amount)
//!       │
//!       ▼
//! CalculationLog::record ──► StoredCalculation { id, rebate, incentive,
//!                                                 amount, calculated_at }
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use rebate_core::{CoreResult, IncentiveType, Rebate, ResultSink};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// One persisted calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCalculation {
    pub id: Uuid,
    pub rebate_identifier: String,
    pub incentive: IncentiveType,
    pub amount: Decimal,
    pub calculated_at: DateTime<Utc>,
}

/// Shared, append-only calculation log.
///
/// Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct CalculationLog {
    entries: Arc<RwLock<Vec<StoredCalculation>>>,
}

impl CalculationLog {
    pub fn new() -> Self {
        CalculationLog::default()
    }

    /// Appends an entry for `rebate` and returns it.
    pub fn record(&self, rebate: &Rebate, amount: Decimal) -> StoreResult<StoredCalculation> {
        let entry = StoredCalculation {
            id: Uuid::new_v4(),
            rebate_identifier: rebate.identifier.clone(),
            incentive: rebate.incentive,
            amount,
            calculated_at: Utc::now(),
        };

        self.entries
            .write()
            .map_err(|_| StoreError::LockPoisoned)?
            .push(entry.clone());

        debug!(
            id = %entry.id,
            rebate = %entry.rebate_identifier,
            amount = %entry.amount,
            "Recorded calculation"
        );

        Ok(entry)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of all entries in the order they were recorded.
    pub fn snapshot(&self) -> Vec<StoredCalculation> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ResultSink for CalculationLog {
    fn store(&self, rebate: &Rebate, amount: Decimal) -> CoreResult<()> {
        self.record(rebate, amount)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_appends_in_order() {
        let log = CalculationLog::new();
        assert!(log.is_empty());

        let cash = Rebate::new("REB001", IncentiveType::FixedCashAmount).with_amount(dec!(50));
        let rate = Rebate::new("REB002", IncentiveType::FixedRateRebate).with_percentage(dec!(0.1));

        log.record(&cash, dec!(50)).unwrap();
        log.record(&rate, dec!(100)).unwrap();

        let entries = log.snapshot();
        assert_eq!(log.len(), 2);
        assert_eq!(entries[0].rebate_identifier, "REB001");
        assert_eq!(entries[0].incentive, IncentiveType::FixedCashAmount);
        assert_eq!(entries[1].amount, dec!(100));
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn test_clones_share_entries() {
        let log = CalculationLog::new();
        let handle = log.clone();
        let rebate = Rebate::new("REB003", IncentiveType::AmountPerUom).with_amount(dec!(5));

        handle.store(&rebate, dec!(100)).unwrap();

        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_poisoned_lock_is_persistence_error() {
        let log = CalculationLog::new();
        let entries = Arc::clone(&log.entries);
        let _ = std::thread::spawn(move || {
            let _guard = entries.write().unwrap();
            panic!("writer crashed");
        })
        .join();

        let rebate = Rebate::new("REB001", IncentiveType::FixedCashAmount).with_amount(dec!(50));
        assert!(matches!(
            log.record(&rebate, dec!(50)),
            Err(StoreError::LockPoisoned)
        ));
        assert!(matches!(
            log.store(&rebate, dec!(50)),
            Err(rebate_core::CoreError::Persistence(_))
        ));
        assert_eq!(log.len(), 0);
    }
}
