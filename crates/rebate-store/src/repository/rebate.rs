//! # Rebate Repository

use std::sync::Arc;

use rebate_core::{Rebate, RebateLookup};

use super::Keyed;

/// Read-only access to the catalog's rebates.
#[derive(Debug, Clone)]
pub struct RebateRepository {
    rebates: Arc<Keyed<Rebate>>,
}

impl RebateRepository {
    pub(crate) fn new(rebates: Arc<Keyed<Rebate>>) -> Self {
        RebateRepository { rebates }
    }

    /// Gets a rebate by its identifier.
    pub fn get_by_identifier(&self, identifier: &str) -> Option<&Rebate> {
        self.rebates.get(identifier)
    }

    /// All rebates in catalog order.
    pub fn list(&self) -> &[Rebate] {
        self.rebates.all()
    }

    pub fn count(&self) -> usize {
        self.rebates.all().len()
    }
}

impl RebateLookup for RebateRepository {
    fn get(&self, identifier: &str) -> Option<Rebate> {
        self.get_by_identifier(identifier).cloned()
    }
}
