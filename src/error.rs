use thiserror::Error;

use crate::cart::CartError;

/// Errors surfaced to callers of the storefront session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
