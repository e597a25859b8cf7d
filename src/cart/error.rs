use thiserror::Error;

use crate::domain::ProductId;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}
