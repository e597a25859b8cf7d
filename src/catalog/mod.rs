//! The catalog store: a fixed, ordered list of products built at start-up.

pub mod error;

pub use error::*;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::{Product, ProductId};

/// Read-only product catalog. Cloning is cheap and every clone shares the
/// same products, so independent sessions can point at one catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Arc<Product>]>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty lists and non-positive or
    /// duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.0 == 0 {
                return Err(CatalogError::InvalidId(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// The pet shop's product line.
    pub fn storefront() -> Self {
        let products = vec![
            Product::new(
                1,
                "Premium Dog Food",
                1499,
                "https://images.unsplash.com/photo-1583337130417-3346a1be7dee?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
                "High-quality dog food with essential nutrients",
            ),
            Product::new(
                2,
                "Cat Food Deluxe",
                1299,
                "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
                "Premium cat food for optimal health",
            ),
            Product::new(
                3,
                "Bird Food Mix",
                899,
                "https://images.unsplash.com/photo-1444464666168-49d633b86797?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
                "Nutritious blend for pet birds",
            ),
        ];

        Self {
            products: products.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn list_products(&self) -> &[Arc<Product>] {
        &self.products
    }

    #[instrument(skip(self))]
    pub fn find(&self, id: ProductId) -> Option<Arc<Product>> {
        let product = self.products.iter().find(|p| p.id == id).cloned();
        if product.is_none() {
            debug!("Product not in catalog");
        }
        product
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::storefront()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Price;

    fn product(id: u32) -> Product {
        Product::new(id, format!("Product {id}"), 100, "https://example.com/p.png", "test")
    }

    #[test]
    fn test_storefront_catalog_is_ordered() {
        let catalog = Catalog::storefront();
        let ids: Vec<u32> = catalog.list_products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.list_products()[0].price, Price(1499));
        assert_eq!(catalog.list_products()[1].price, Price(1299));
        assert_eq!(catalog.list_products()[2].price, Price(899));
    }

    #[test]
    fn test_listing_is_stable() {
        let catalog = Catalog::storefront();
        let first: Vec<_> = catalog.list_products().to_vec();
        let second: Vec<_> = catalog.list_products().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_shares_catalog_product() {
        let catalog = Catalog::storefront();
        let found = catalog.find(ProductId(2)).unwrap();
        assert!(Arc::ptr_eq(&found, &catalog.list_products()[1]));
        assert!(catalog.find(ProductId(42)).is_none());
    }

    #[test]
    fn test_new_rejects_invalid_catalogs() {
        assert_eq!(Catalog::new(vec![]).unwrap_err(), CatalogError::Empty);
        assert_eq!(
            Catalog::new(vec![product(0)]).unwrap_err(),
            CatalogError::InvalidId(ProductId(0))
        );
        assert_eq!(
            Catalog::new(vec![product(1), product(1)]).unwrap_err(),
            CatalogError::DuplicateId(ProductId(1))
        );
        assert_eq!(Catalog::new(vec![product(7), product(8)]).unwrap().len(), 2);
    }
}
