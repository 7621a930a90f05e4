//! Vendor dashboard read model: order counts per fulfilment stage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use common::{OrderId, VendorId};
use domain::{EventEnvelope, Money, OrderEvent, OrderStatus};
use serde::Serialize;

use crate::lock;
use crate::projection::{Projection, ProjectionPosition};
use crate::read_model::ReadModel;
use crate::{ProjectionError, Result};

/// Headline numbers for one vendor's dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorStats {
    pub vendor_id: VendorId,
    pub total_orders: u64,
    pub pending: u64,
    pub preparing: u64,
    /// Orders marked ready.
    pub completed: u64,
    /// Sum of every order total placed with this vendor.
    pub revenue: Money,
}

impl VendorStats {
    fn empty(vendor_id: VendorId) -> Self {
        Self {
            vendor_id,
            total_orders: 0,
            pending: 0,
            preparing: 0,
            completed: 0,
            revenue: Money::zero(),
        }
    }

    /// Orders still in the kitchen.
    pub fn active(&self) -> u64 {
        self.pending + self.preparing
    }

    fn bucket(&mut self, status: OrderStatus) -> &mut u64 {
        match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Preparing => &mut self.preparing,
            OrderStatus::Ready => &mut self.completed,
        }
    }
}

#[derive(Default)]
struct VendorDashboardState {
    vendors: HashMap<VendorId, VendorStats>,
    /// Maps order_id -> (vendor, current status).
    orders: HashMap<OrderId, (VendorId, OrderStatus)>,
    position: ProjectionPosition,
}

/// Read model view for vendor dashboards.
#[derive(Clone, Default)]
pub struct VendorDashboardView {
    state: Arc<RwLock<VendorDashboardState>>,
}

impl VendorDashboardView {
    /// Creates a new empty dashboard view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats for `vendor_id`; all zeros for a vendor with no orders.
    pub fn stats(&self, vendor_id: &VendorId) -> VendorStats {
        lock::read(&self.state)
            .vendors
            .get(vendor_id)
            .cloned()
            .unwrap_or_else(|| VendorStats::empty(vendor_id.clone()))
    }

    /// Stats for every vendor that has received an order, ordered by vendor id.
    pub fn all_vendors(&self) -> Vec<VendorStats> {
        let mut vendors: Vec<_> = lock::read(&self.state).vendors.values().cloned().collect();
        vendors.sort_by(|a, b| a.vendor_id.cmp(&b.vendor_id));
        vendors
    }
}

impl Projection for VendorDashboardView {
    fn name(&self) -> &'static str {
        "VendorDashboardView"
    }

    fn handle(&self, event: &EventEnvelope) -> Result<()> {
        let mut state = lock::write(&self.state);

        match &event.event {
            OrderEvent::OrderPlaced(data) => {
                state
                    .orders
                    .insert(data.order_id, (data.vendor_id.clone(), OrderStatus::Pending));

                let stats = state
                    .vendors
                    .entry(data.vendor_id.clone())
                    .or_insert_with(|| VendorStats::empty(data.vendor_id.clone()));
                stats.total_orders += 1;
                stats.pending += 1;
                stats.revenue += data.total_price;
            }
            OrderEvent::StatusAdvanced(data) => {
                let Some((vendor_id, status)) = state.orders.get_mut(&event.order_id) else {
                    return Err(ProjectionError::UnknownOrder {
                        projection: "VendorDashboardView",
                        order_id: event.order_id,
                    });
                };
                *status = data.to;
                let vendor_id = vendor_id.clone();

                if let Some(stats) = state.vendors.get_mut(&vendor_id) {
                    let from = stats.bucket(data.from);
                    *from = from.saturating_sub(1);
                    *stats.bucket(data.to) += 1;
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
        *lock::write(&self.state) = VendorDashboardState::default();
        Ok(())
    }
}

impl ReadModel for VendorDashboardView {
    fn name(&self) -> &'static str {
        "VendorDashboardView"
    }

    fn count(&self) -> usize {
        lock::read(&self.state).vendors.len()
    }
}
