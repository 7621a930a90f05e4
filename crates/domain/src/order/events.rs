//! Order domain events.

use chrono::{DateTime, Utc};
use common::{CustomerId, Money, OrderId, VendorId};
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

use super::{OrderItem, OrderStatus};

/// Events that can occur on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    /// A customer placed the order.
    OrderPlaced(OrderPlacedData),

    /// The vendor moved the order one step along its lifecycle.
    StatusAdvanced(StatusAdvancedData),
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::OrderPlaced(_) => "OrderPlaced",
            OrderEvent::StatusAdvanced(_) => "StatusAdvanced",
        }
    }
}

/// Data for OrderPlaced event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPlacedData {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub vendor_id: VendorId,

    /// Snapshotted order lines.
    pub items: Vec<OrderItem>,

    /// Sum of line totals, fixed at placement.
    pub total_price: Money,

    pub placed_at: DateTime<Utc>,
}

/// Data for StatusAdvanced event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusAdvancedData {
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub advanced_at: DateTime<Utc>,
}

// Convenience constructors for events
impl OrderEvent {
    /// Creates an OrderPlaced event, computing the total from the lines.
    pub fn order_placed(
        order_id: OrderId,
        customer_id: CustomerId,
        vendor_id: VendorId,
        items: Vec<OrderItem>,
        placed_at: DateTime<Utc>,
    ) -> Self {
        let total_price = items.iter().map(OrderItem::line_total).sum();
        OrderEvent::OrderPlaced(OrderPlacedData {
            order_id,
            customer_id,
            vendor_id,
            items,
            total_price,
            placed_at,
        })
    }

    /// Creates a StatusAdvanced event.
    pub fn status_advanced(
        from: OrderStatus,
        to: OrderStatus,
        advanced_at: DateTime<Utc>,
    ) -> Self {
        OrderEvent::StatusAdvanced(StatusAdvancedData {
            from,
            to,
            advanced_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type() {
        let event = OrderEvent::order_placed(
            OrderId::new(),
            CustomerId::new("1"),
            VendorId::new("2"),
            vec![OrderItem::new("1", "Idli Sambar", Money::from_major(45), 1)],
            Utc::now(),
        );
        assert_eq!(event.event_type(), "OrderPlaced");

        let event =
            OrderEvent::status_advanced(OrderStatus::Pending, OrderStatus::Preparing, Utc::now());
        assert_eq!(event.event_type(), "StatusAdvanced");
    }

    #[test]
    fn test_order_placed_computes_total() {
        let event = OrderEvent::order_placed(
            OrderId::new(),
            CustomerId::new("1"),
            VendorId::new("2"),
            vec![
                OrderItem::new("1", "Idli Sambar", Money::from_major(45), 2),
                OrderItem::new("10", "Masala Chai", Money::from_major(15), 1),
            ],
            Utc::now(),
        );

        match event {
            OrderEvent::OrderPlaced(data) => assert_eq!(data.total_price, Money::from_major(105)),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_serialized_tag() {
        let event =
            OrderEvent::status_advanced(OrderStatus::Preparing, OrderStatus::Ready, Utc::now());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "StatusAdvanced");
        assert_eq!(json["data"]["to"], "ready");
    }
}
