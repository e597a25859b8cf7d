//! The cart store: an ordered multiset of references into the catalog.

pub mod error;

pub use error::*;

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::catalog::Catalog;
use crate::domain::{Price, Product, ProductId};

/// Items a shopper has added during one session.
///
/// Entries are shared `Arc<Product>` handles from the catalog. The same
/// product may appear several times; insertion order is kept for display.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<Arc<Product>>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the catalog product with `id`.
    ///
    /// # Errors
    /// Returns [`CartError::ProductNotFound`] and leaves the cart untouched
    /// when the catalog has no such product.
    #[instrument(skip(self, catalog))]
    pub fn add(&mut self, catalog: &Catalog, id: ProductId) -> Result<Arc<Product>, CartError> {
        match catalog.find(id) {
            Some(product) => {
                self.entries.push(Arc::clone(&product));
                debug!(entries = self.entries.len(), "Product appended to cart");
                Ok(product)
            }
            None => {
                warn!("Ignoring add for unknown product");
                Err(CartError::ProductNotFound(id))
            }
        }
    }

    /// Drops every entry for `id` and returns how many were removed.
    /// Removing an id that is not in the cart is not an error.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: ProductId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = before - self.entries.len();
        if removed == 0 {
            debug!("No cart entries matched");
        } else {
            debug!(removed, "Cart entries removed");
        }
        removed
    }

    pub fn total(&self) -> Price {
        self.entries.iter().map(|entry| entry.price).sum()
    }

    pub fn entries(&self) -> &[Arc<Product>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
