//! Order aggregate implementation.

use chrono::{DateTime, Utc};
use common::{CustomerId, MAX_LINE_QUANTITY, Money, OrderId, VendorId, Version};
use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;

use super::{OrderError, OrderEvent, OrderItem, OrderStatus, events::OrderPlacedData};

/// Order aggregate root.
///
/// Created from an [`OrderEvent::OrderPlaced`] event; afterwards only its
/// status changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    version: Version,
    customer_id: CustomerId,
    vendor_id: VendorId,

    /// Lines in the order they were placed.
    items: Vec<OrderItem>,

    /// Total fixed at placement; never recomputed.
    total_price: Money,

    status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Aggregate for Order {
    type Id = OrderId;
    type Event = OrderEvent;
    type Error = OrderError;

    fn aggregate_type() -> &'static str {
        "Order"
    }

    fn id(&self) -> OrderId {
        self.id
    }

    fn version(&self) -> Version {
        self.version
    }

    fn from_first_event(event: Self::Event) -> Option<Self> {
        match event {
            OrderEvent::OrderPlaced(data) => Some(Self::from_placed(data)),
            OrderEvent::StatusAdvanced(_) => None,
        }
    }

    fn apply(&mut self, event: Self::Event) {
        match event {
            // A stream has exactly one OrderPlaced, consumed by from_first_event.
            OrderEvent::OrderPlaced(_) => {}
            OrderEvent::StatusAdvanced(data) => {
                self.status = data.to;
                self.updated_at = data.advanced_at;
            }
        }
        self.version = self.version.next();
    }
}

impl Order {
    fn from_placed(data: OrderPlacedData) -> Self {
        Self {
            id: data.order_id,
            version: Version::first(),
            customer_id: data.customer_id,
            vendor_id: data.vendor_id,
            items: data.items,
            total_price: data.total_price,
            status: OrderStatus::Pending,
            created_at: data.placed_at,
            updated_at: data.placed_at,
        }
    }
}

// Query methods
impl Order {
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn vendor_id(&self) -> &VendorId {
        &self.vendor_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the order lines in placement order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the total quantity over all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// When the order was placed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the status last changed (placement time if it never did).
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true while the order still needs vendor work.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns true once the order is ready for pickup.
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

// Command methods (return events)
impl Order {
    /// Validates lines for a new order.
    ///
    /// Rejects an empty list, quantities outside `1..=MAX_LINE_QUANTITY` and
    /// negative prices. A menu item
    /// may appear on more than one line; each line counts toward the total.
    pub fn validate_items(items: &[OrderItem]) -> Result<(), OrderError> {
        if items.is_empty() {
            return Err(OrderError::NoItems);
        }

        for item in items {
            if !(1..=MAX_LINE_QUANTITY).contains(&item.quantity) {
                return Err(OrderError::InvalidQuantity {
                    item_id: item.item_id.clone(),
                    quantity: item.quantity,
                });
            }
            if item.price.is_negative() {
                return Err(OrderError::InvalidPrice {
                    item_id: item.item_id.clone(),
                    price: item.price.minor(),
                });
            }
        }

        Ok(())
    }

    /// Places a new order, stamped with the current time.
    pub fn place(
        customer_id: CustomerId,
        items: Vec<OrderItem>,
        vendor_id: VendorId,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        Self::place_at(customer_id, items, vendor_id, Utc::now())
    }

    /// Places a new order with an explicit placement time.
    pub fn place_at(
        customer_id: CustomerId,
        items: Vec<OrderItem>,
        vendor_id: VendorId,
        placed_at: DateTime<Utc>,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        Self::validate_items(&items)?;

        Ok(vec![OrderEvent::order_placed(
            OrderId::new(),
            customer_id,
            vendor_id,
            items,
            placed_at,
        )])
    }

    /// Moves the order to `requested`, which must be the single next step.
    pub fn advance_status(&self, requested: OrderStatus) -> Result<Vec<OrderEvent>, OrderError> {
        self.advance_status_at(requested, Utc::now())
    }

    /// Like [`Order::advance_status`] with an explicit transition time.
    pub fn advance_status_at(
        &self,
        requested: OrderStatus,
        at: DateTime<Utc>,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        if !self.status.can_advance_to(requested) {
            return Err(OrderError::InvalidStatusTransition {
                current: self.status,
                requested,
            });
        }

        Ok(vec![OrderEvent::status_advanced(self.status, requested, at)])
    }
}
