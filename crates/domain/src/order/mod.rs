//! Order aggregate and related types.

mod aggregate;
mod events;
mod service;
mod state;
mod value_objects;

pub use aggregate::Order;
pub use events::{OrderEvent, OrderPlacedData, StatusAdvancedData};
pub use service::{OrderService, VendorQueue};
pub use state::{OrderStatus, UnknownStatus};
pub use value_objects::OrderItem;

use common::{MenuItemId, OrderId, VendorId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Order has no items.
    #[error("Order has no items")]
    NoItems,

    /// Quantity on an order line outside `1..=MAX_LINE_QUANTITY`.
    #[error("Invalid quantity for {item_id}: {quantity} (must be between 1 and 99)")]
    InvalidQuantity { item_id: MenuItemId, quantity: u32 },

    /// Negative unit price on an order line.
    #[error("Invalid price for {item_id}: {price} (must not be negative)")]
    InvalidPrice { item_id: MenuItemId, price: i64 },

    /// The requested status is not the single next step from the current one.
    #[error("Invalid status transition: cannot move from {current} to {requested}")]
    InvalidStatusTransition {
        current: OrderStatus,
        requested: OrderStatus,
    },

    /// No order with this identifier.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// A vendor tried to update another vendor's order.
    #[error("Order {order_id} does not belong to vendor {vendor_id}")]
    NotOrderVendor {
        order_id: OrderId,
        vendor_id: VendorId,
    },
}
