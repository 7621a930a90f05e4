//! Customer orders read model: per-customer order history and spending.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use common::{CustomerId, OrderId, VendorId};
use domain::{EventEnvelope, Money, OrderEvent, OrderStatus};
use serde::Serialize;

use crate::lock;
use crate::projection::{Projection, ProjectionPosition};
use crate::read_model::ReadModel;
use crate::{ProjectionError, Result};

/// One row of a customer's order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub vendor_id: VendorId,
    pub item_count: u32,
    pub total_price: Money,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-customer order statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerOrdersSummary {
    pub customer_id: CustomerId,
    pub total_orders: u64,
    pub active_orders: u64,
    pub completed_orders: u64,
    /// Sum of the totals of every order placed.
    pub total_spent: Money,
    /// Orders in placement order.
    pub order_ids: Vec<OrderId>,
}

#[derive(Default)]
struct CustomerOrdersState {
    customers: HashMap<CustomerId, CustomerOrdersSummary>,
    orders: HashMap<OrderId, (CustomerId, OrderSummary)>,
    position: ProjectionPosition,
}

/// Read model view for the customer's "My orders" screen.
#[derive(Clone, Default)]
pub struct CustomerOrdersView {
    state: Arc<RwLock<CustomerOrdersState>>,
}

impl CustomerOrdersView {
    /// Creates a new empty customer orders view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets statistics for a specific customer.
    pub fn get_customer(&self, customer_id: &CustomerId) -> Option<CustomerOrdersSummary> {
        lock::read(&self.state).customers.get(customer_id).cloned()
    }

    /// Gets a single order row.
    pub fn get_order(&self, order_id: OrderId) -> Option<OrderSummary> {
        lock::read(&self.state)
            .orders
            .get(&order_id)
            .map(|(_, summary)| summary.clone())
    }

    /// A customer's orders, newest first.
    pub fn history(&self, customer_id: &CustomerId) -> Vec<OrderSummary> {
        let state = lock::read(&self.state);
        let Some(customer) = state.customers.get(customer_id) else {
            return Vec::new();
        };

        let mut rows: Vec<OrderSummary> = customer
            .order_ids
            .iter()
            .filter_map(|id| state.orders.get(id).map(|(_, summary)| summary.clone()))
            .collect();
        rows.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        rows
    }

    /// Gets the top customers by total spent, limited to `limit` results.
    pub fn top_customers(&self, limit: usize) -> Vec<CustomerOrdersSummary> {
        let mut customers: Vec<_> = lock::read(&self.state)
            .customers
            .values()
            .cloned()
            .collect();
        customers.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
        customers.truncate(limit);
        customers
    }
}

impl Projection for CustomerOrdersView {
    fn name(&self) -> &'static str {
        "CustomerOrdersView"
    }

    fn handle(&self, event: &EventEnvelope) -> Result<()> {
        let mut state = lock::write(&self.state);

        match &event.event {
            OrderEvent::OrderPlaced(data) => {
                let summary = OrderSummary {
                    order_id: data.order_id,
                    vendor_id: data.vendor_id.clone(),
                    item_count: data.items.iter().map(|item| item.quantity).sum(),
                    total_price: data.total_price,
                    status: OrderStatus::Pending,
                    placed_at: data.placed_at,
                    updated_at: data.placed_at,
                };
                state
                    .orders
                    .insert(data.order_id, (data.customer_id.clone(), summary));

                let entry = state
                    .customers
                    .entry(data.customer_id.clone())
                    .or_insert_with(|| CustomerOrdersSummary {
                        customer_id: data.customer_id.clone(),
                        total_orders: 0,
                        active_orders: 0,
                        completed_orders: 0,
                        total_spent: Money::zero(),
                        order_ids: Vec::new(),
                    });
                entry.total_orders += 1;
                entry.active_orders += 1;
                entry.total_spent += data.total_price;
                entry.order_ids.push(data.order_id);
            }
            OrderEvent::StatusAdvanced(data) => {
                let Some((customer_id, summary)) = state.orders.get_mut(&event.order_id) else {
                    return Err(ProjectionError::UnknownOrder {
                        projection: "CustomerOrdersView",
                        order_id: event.order_id,
                    });
                };
                summary.status = data.to;
                summary.updated_at = data.advanced_at;
                let customer_id = customer_id.clone();

                if data.to.is_completed()
                    && let Some(customer) = state.customers.get_mut(&customer_id)
                {
                    customer.active_orders = customer.active_orders.saturating_sub(1);
                    customer.completed_orders += 1;
                }
            }
        }

        state.position = state.position.advance();
        Ok(())
    }

    fn position(&self) -> ProjectionPosition {
        lock::read(&self.state).position
    }

    fn reset(&self) -> Result<()> {
        *lock::write(&self.state) = CustomerOrdersState::default();
        Ok(())
    }
}

impl ReadModel for CustomerOrdersView {
    fn name(&self) -> &'static str {
        "CustomerOrdersView"
    }

    fn count(&self) -> usize {
        lock::read(&self.state).customers.len()
    }
}
