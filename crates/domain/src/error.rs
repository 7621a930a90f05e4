//! Domain error types.

use thiserror::Error;

use crate::cart::CartError;
use crate::catalog::CatalogError;
use crate::order::OrderError;

/// Errors that can occur during domain operations.
///
/// Every variant is a validation failure; the state the operation was applied
/// to is left as it was.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The catalog rejected its input.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// An order operation failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}
