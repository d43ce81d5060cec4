//! # Product Repository
//!
//! Read-only product records.
//!
//! ## Key Operations
//! - Exact identifier lookup (the calculator's `ProductLookup`)
//! - Listing in catalog order (the CLI's `list` command)

use std::sync::Arc;

use rebate_core::{IncentiveType, Product, ProductLookup};

use super::Keyed;

/// Repository for product records.
///
/// ## Usage
/// ```rust
/// use rebate_store::{demo_catalog, Store};
///
/// let store = Store::from_catalog(demo_catalog()).unwrap();
/// let products = store.products();
/// let laptop = products.get_by_identifier("LAPTOP-X1").unwrap();
/// assert_eq!(laptop.uom, "units");
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    products: Arc<Keyed<Product>>,
}

impl ProductRepository {
    pub(crate) fn new(products: Arc<Keyed<Product>>) -> Self {
        ProductRepository { products }
    }

    /// Gets a product by its identifier.
    ///
    /// ## Returns
    /// * `Some(&Product)` - Product found
    /// * `None` - No product with exactly this identifier
    pub fn get_by_identifier(&self, identifier: &str) -> Option<&Product> {
        self.products.get(identifier)
    }

    /// All products in catalog order.
    pub fn list(&self) -> &[Product] {
        self.products.all()
    }

    /// Products that accept the given incentive type.
    pub fn supporting(&self, incentive: IncentiveType) -> Vec<&Product> {
        self.products
            .all()
            .iter()
            .filter(|product| product.supports(incentive))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.products.all().len()
    }
}

impl ProductLookup for ProductRepository {
    fn get(&self, identifier: &str) -> Option<Product> {
        self.get_by_identifier(identifier).cloned()
    }
}
