//! # Rebate Calculator
//!
//! The single entry point: turns a [`CalculationRequest`] into a
//! [`CalculationResult`].
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    RebateCalculator::execute                            │
//! │                                                                         │
//! │  1. rebates.get(rebate_id) ────── None ──► failure: NOT_FOUND           │
//! │       │                                                                 │
//! │  2. products.get(product_id) ──── None ──► failure: NOT_FOUND           │
//! │       │                                                                 │
//! │  3. registry.resolve(incentive) ─ Err ───► failure: UNSUPPORTED_...     │
//! │       │                                                                 │
//! │  4. rule.is_eligible(..) ──────── false ─► failure: VALIDATION_FAILED   │
//! │       │                                                                 │
//! │  5. rule.compute(..) ──────────── None ──► failure: VALIDATION_FAILED   │
//! │       │                                                                 │
//! │  6. sink.store(rebate, amount)   (errors logged, never reported)        │
//! │       │                                                                 │
//! │  7. success(amount)                                                     │
//! │                                                                         │
//! │  Each step runs only if the previous one succeeded. Steps 1-5 never    │
//! │  reach the sink.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::ports::{ProductLookup, RebateLookup, ResultSink};
use crate::registry::RuleRegistry;
use crate::types::{CalculationRequest, CalculationResult};

/// Orchestrates lookup → rule resolution → eligibility → compute → persist.
///
/// Holds no mutable state; one instance can serve concurrent callers as
/// long as its collaborators can.
#[derive(Clone)]
pub struct RebateCalculator {
    rebates: Arc<dyn RebateLookup>,
    products: Arc<dyn ProductLookup>,
    registry: RuleRegistry,
    sink: Arc<dyn ResultSink>,
}

impl RebateCalculator {
    /// Starts wiring a calculator.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let calculator = RebateCalculator::builder()
    ///     .rebates(store.rebates())
    ///     .products(store.products())
    ///     .registry(RuleRegistry::standard())
    ///     .sink(store.calculations())
    ///     .build()?;
    /// ```
    pub fn builder() -> RebateCalculatorBuilder {
        RebateCalculatorBuilder::default()
    }

    /// Runs one calculation. Never panics, never returns an error: every
    /// failure is folded into the result.
    pub fn execute(&self, request: &CalculationRequest) -> CalculationResult {
        let outcome = self.calculate(request);
        if let Err(error) = &outcome {
            debug!(
                rebate = %request.rebate_identifier,
                product = %request.product_identifier,
                %error,
                "Rebate calculation failed"
            );
        }
        CalculationResult::from(outcome)
    }

    /// Steps 1-6 as a `?` chain.
    fn calculate(&self, request: &CalculationRequest) -> CoreResult<Decimal> {
        let rebate = self
            .rebates
            .get(&request.rebate_identifier)
            .ok_or_else(|| CoreError::RebateNotFound(request.rebate_identifier.clone()))?;

        let product = self
            .products
            .get(&request.product_identifier)
            .ok_or_else(|| CoreError::ProductNotFound(request.product_identifier.clone()))?;

        let rule = self.registry.resolve(rebate.incentive)?;

        if let Err(reason) = rule.check(&rebate, &product, request) {
            debug!(rule = ?rule, %reason, "Eligibility gate rejected request");
            return Err(CoreError::ValidationFailed);
        }

        let amount = rule
            .compute(&rebate, &product, request)
            .ok_or(CoreError::AmountOverflow)?;

        // TODO: switch to at-least-once delivery once sinks can be retried.
        if let Err(error) = self.sink.store(&rebate, amount) {
            warn!(rebate = %rebate.identifier, %amount, %error, "Calculation result not persisted");
        }

        info!(
            rebate = %rebate.identifier,
            product = %product.identifier,
            volume = %request.volume,
            %amount,
            "Rebate calculated"
        );
        Ok(amount)
    }
}

impl std::fmt::Debug for RebateCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RebateCalculator")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Collects collaborators; [`build`](Self::build) fails if any is missing.
#[derive(Default)]
pub struct RebateCalculatorBuilder {
    rebates: Option<Arc<dyn RebateLookup>>,
    products: Option<Arc<dyn ProductLookup>>,
    registry: Option<RuleRegistry>,
    sink: Option<Arc<dyn ResultSink>>,
}

impl RebateCalculatorBuilder {
    pub fn rebates(mut self, lookup: impl RebateLookup + 'static) -> Self {
        self.rebates = Some(Arc::new(lookup));
        self
    }

    pub fn products(mut self, lookup: impl ProductLookup + 'static) -> Self {
        self.products = Some(Arc::new(lookup));
        self
    }

    pub fn registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn sink(mut self, sink: impl ResultSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Finishes wiring.
    ///
    /// ## Errors
    /// `CoreError::InvalidConfiguration` naming the first missing
    /// collaborator.
    pub fn build(self) -> CoreResult<RebateCalculator> {
        Ok(RebateCalculator {
            rebates: self.rebates.ok_or_else(|| CoreError::missing("rebate lookup"))?,
            products: self
                .products
                .ok_or_else(|| CoreError::missing("product lookup"))?,
            registry: self
                .registry
                .ok_or_else(|| CoreError::missing("rule registry"))?,
            sink: self.sink.ok_or_else(|| CoreError::missing("result sink"))?,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
