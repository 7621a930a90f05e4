//! In-memory order book with an append-only event journal.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use common::{CustomerId, OrderId, VendorId, Version};

use crate::aggregate::{Aggregate, DomainEvent};
use crate::command::CommandResult;
use crate::envelope::EventEnvelope;

use super::{Order, OrderError, OrderEvent, OrderItem, OrderStatus};

/// A vendor's orders split for the fulfilment dashboard.
#[derive(Debug, Default)]
pub struct VendorQueue<'a> {
    /// Orders not yet ready, oldest first.
    pub active: Vec<&'a Order>,

    /// Ready orders, most recently finished first.
    pub completed: Vec<&'a Order>,
}

/// Service for placing and fulfilling orders.
///
/// Owns every order of one storefront instance. Every event a command produces
/// is applied to its order and appended to the journal; orders are never
/// removed.
#[derive(Debug, Default)]
pub struct OrderService {
    /// Orders in placement order.
    orders: Vec<Order>,
    index: HashMap<OrderId, usize>,
    journal: Vec<EventEnvelope>,
}

impl OrderService {
    /// Creates an empty order book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds an order book by replaying a journal.
    ///
    /// Entries are re-sequenced and re-stamped. An order whose stream does not
    /// start with an `OrderPlaced` event is reported as [`OrderError::NotFound`].
    pub fn from_journal(journal: &[EventEnvelope]) -> Result<Self, OrderError> {
        let mut service = Self::new();
        for envelope in journal {
            service.execute(envelope.order_id, |_| Ok(vec![envelope.event.clone()]))?;
        }
        Ok(service)
    }

    /// Places an order for `customer_id` with `vendor_id`.
    ///
    /// The total is `Σ price × quantity` over `items`; the order starts out
    /// [`OrderStatus::Pending`].
    #[tracing::instrument(skip(self, items), fields(lines = items.len()))]
    pub fn create_order(
        &mut self,
        customer_id: CustomerId,
        items: Vec<OrderItem>,
        vendor_id: VendorId,
    ) -> Result<CommandResult<Order>, OrderError> {
        self.create_order_at(customer_id, items, vendor_id, Utc::now())
    }

    /// Like [`OrderService::create_order`] with an explicit placement time.
    pub fn create_order_at(
        &mut self,
        customer_id: CustomerId,
        items: Vec<OrderItem>,
        vendor_id: VendorId,
        placed_at: DateTime<Utc>,
    ) -> Result<CommandResult<Order>, OrderError> {
        let events = Order::place_at(customer_id, items, vendor_id, placed_at)?;
        let order_id = match events.first() {
            Some(OrderEvent::OrderPlaced(data)) => data.order_id,
            _ => return Err(OrderError::NoItems),
        };

        let result = self.execute(order_id, |_| Ok(events))?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(
            %order_id,
            customer_id = %result.aggregate.customer_id(),
            vendor_id = %result.aggregate.vendor_id(),
            total = %result.aggregate.total_price(),
            "order placed"
        );

        Ok(result)
    }

    /// Moves an order to `requested`, which must be the next step of its lifecycle.
    #[tracing::instrument(skip(self))]
    pub fn advance_status(
        &mut self,
        order_id: OrderId,
        requested: OrderStatus,
    ) -> Result<CommandResult<Order>, OrderError> {
        self.advance_status_at(order_id, requested, Utc::now())
    }

    /// Like [`OrderService::advance_status`] with an explicit transition time.
    pub fn advance_status_at(
        &mut self,
        order_id: OrderId,
        requested: OrderStatus,
        at: DateTime<Utc>,
    ) -> Result<CommandResult<Order>, OrderError> {
        let result = self.execute(order_id, |order| match order {
            Some(order) => order.advance_status_at(requested, at),
            None => Err(OrderError::NotFound(order_id)),
        });

        match &result {
            Ok(_) => {
                metrics::counter!("order_status_transitions_total", "to" => requested.as_str())
                    .increment(1);
                tracing::info!(%order_id, status = %requested, "order status advanced");
            }
            Err(err) => {
                metrics::counter!("order_transitions_rejected_total").increment(1);
                tracing::warn!(%order_id, requested = %requested, error = %err, "status change rejected");
            }
        }

        result
    }

    /// Vendor-scoped [`OrderService::advance_status`]: the order must belong to `vendor_id`.
    #[tracing::instrument(skip(self))]
    pub fn advance_status_for_vendor(
        &mut self,
        vendor_id: &VendorId,
        order_id: OrderId,
        requested: OrderStatus,
    ) -> Result<CommandResult<Order>, OrderError> {
        let order = self.get(order_id).ok_or(OrderError::NotFound(order_id))?;
        if order.vendor_id() != vendor_id {
            return Err(OrderError::NotOrderVendor {
                order_id,
                vendor_id: vendor_id.clone(),
            });
        }

        self.advance_status(order_id, requested)
    }

    /// Runs a command against the current state of an order and records its events.
    ///
    /// The command sees `None` for an order that does not exist yet, in which
    /// case its first event must open the order's stream. Nothing is recorded
    /// when the command fails.
    fn execute<F>(
        &mut self,
        order_id: OrderId,
        command_fn: F,
    ) -> Result<CommandResult<Order>, OrderError>
    where
        F: FnOnce(Option<&Order>) -> Result<Vec<OrderEvent>, OrderError>,
    {
        let existing = self.index.get(&order_id).copied();
        let events = command_fn(existing.map(|p| &self.orders[p]))?;
        let mut pending = events.iter();

        let position = match existing {
            Some(position) => position,
            None => {
                let first = pending.next().ok_or(OrderError::NotFound(order_id))?;
                let order = Order::from_first_event(first.clone())
                    .filter(|order| order.id() == order_id)
                    .ok_or(OrderError::NotFound(order_id))?;
                self.record(order_id, order.version(), first);
                self.orders.push(order);
                self.index.insert(order_id, self.orders.len() - 1);
                self.orders.len() - 1
            }
        };

        for event in pending {
            let order = &mut self.orders[position];
            order.apply(event.clone());
            let version = order.version();
            self.record(order_id, version, event);
        }

        let aggregate = self.orders[position].clone();
        let new_version = aggregate.version();
        Ok(CommandResult {
            aggregate,
            events,
            new_version,
        })
    }

    fn record(&mut self, order_id: OrderId, version: Version, event: &OrderEvent) {
        let sequence = self.journal.len() as u64 + 1;
        tracing::debug!(sequence, %order_id, event_type = event.event_type(), "event recorded");
        self.journal
            .push(EventEnvelope::new(sequence, order_id, version, event.clone()));
    }
}

// Queries
impl OrderService {
    pub fn get(&self, order_id: OrderId) -> Option<&Order> {
        self.index.get(&order_id).map(|&p| &self.orders[p])
    }

    /// All orders in placement order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders fulfilled by `vendor_id`, in placement order.
    pub fn orders_for_vendor(&self, vendor_id: &VendorId) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.vendor_id() == vendor_id)
            .collect()
    }

    /// Orders placed by `customer_id`, newest first.
    pub fn orders_for_customer(&self, customer_id: &CustomerId) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .orders
            .iter()
            .filter(|order| order.customer_id() == customer_id)
            .collect();
        orders.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        orders
    }

    /// Splits a vendor's orders into active (not ready) and completed (ready).
    pub fn vendor_queue(&self, vendor_id: &VendorId) -> VendorQueue<'_> {
        let (mut active, mut completed): (Vec<&Order>, Vec<&Order>) = self
            .orders_for_vendor(vendor_id)
            .into_iter()
            .partition(|order| order.is_active());

        active.sort_by_key(|order| order.created_at());
        completed.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));

        VendorQueue { active, completed }
    }

    /// The full journal, oldest entry first.
    pub fn journal(&self) -> &[EventEnvelope] {
        &self.journal
    }

    /// Journal entries after the first `position` ones.
    pub fn events_since(&self, position: u64) -> &[EventEnvelope] {
        let start = usize::try_from(position)
            .unwrap_or(usize::MAX)
            .min(self.journal.len());
        &self.journal[start..]
    }
}
