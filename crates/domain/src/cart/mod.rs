//! The customer's cart.

mod item;
mod store;
mod summary;

pub use item::CartItem;
pub use store::CartStore;
pub use summary::CartSummary;

use common::MenuItemId;
use thiserror::Error;

/// Errors that can occur while restoring or building cart lines.
///
/// Mutations on a live cart never fail; unknown identifiers are ignored.
#[derive(Debug, Error)]
pub enum CartError {
    /// A cart line with a quantity outside `1..=MAX_LINE_QUANTITY`.
    #[error("Invalid quantity for {item_id}: {quantity} (must be between 1 and 99)")]
    InvalidQuantity { item_id: MenuItemId, quantity: u32 },

    /// The same menu item appears on two cart lines.
    #[error("Duplicate cart line for item {0}")]
    DuplicateItem(MenuItemId),

    /// A stashed cart could not be encoded or decoded.
    #[error("Cart snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
