use thiserror::Error;

use crate::domain::ProductId;

/// Errors raised while building a catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog must contain at least one product")]
    Empty,
    #[error("Invalid product id: {0}")]
    InvalidId(ProductId),
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),
}
