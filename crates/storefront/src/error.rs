//! Storefront error types.

use std::path::PathBuf;

use common::MenuItemId;
use domain::{CartError, CatalogError, DomainError, OrderError};
use projections::ProjectionError;
use thiserror::Error;

/// Errors surfaced by [`Storefront`](crate::Storefront) operations.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The requested menu item is not in the catalog.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(MenuItemId),

    /// The menu item has no units left.
    #[error("Menu item sold out: {0}")]
    SoldOut(MenuItemId),

    /// The catalog file could not be read.
    #[error("Cannot read catalog {path}: {source}")]
    CatalogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Domain logic error.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A read model fell out of step with the journal.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<CatalogError> for StorefrontError {
    fn from(err: CatalogError) -> Self {
        StorefrontError::Domain(err.into())
    }
}

impl From<CartError> for StorefrontError {
    fn from(err: CartError) -> Self {
        StorefrontError::Domain(err.into())
    }
}

impl From<OrderError> for StorefrontError {
    fn from(err: OrderError) -> Self {
        StorefrontError::Domain(err.into())
    }
}

/// Result type for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;
