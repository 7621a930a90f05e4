//! Daily sales read model.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use common::VendorId;
use domain::{EventEnvelope, Money, OrderEvent};
use serde::Serialize;

use crate::Result;
use crate::lock;
use crate::projection::{Projection, ProjectionPosition};
use crate::read_model::ReadModel;

/// Orders placed with one vendor on one (UTC) day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    pub vendor_id: VendorId,
    pub date: NaiveDate,
    pub total_sales: Money,
    pub total_orders: u64,
}

#[derive(Default)]
struct DailySalesState {
    days: BTreeMap<(VendorId, NaiveDate), DailySales>,
    position: ProjectionPosition,
}

/// Read model view for the vendor's sales analytics.
///
/// Sales are booked on the day an order is placed.
#[derive(Clone, Default)]
pub struct DailySalesView {
    state: Arc<RwLock<DailySalesState>>,
}

impl DailySalesView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A vendor's sales, one row per day with orders, oldest day first.
    pub fn for_vendor(&self, vendor_id: &VendorId) -> Vec<DailySales> {
        lock::read(&self.state)
            .days
            .values()
            .filter(|day| &day.vendor_id == vendor_id)
            .cloned()
            .collect()
    }

    pub fn on(&self, vendor_id: &VendorId, date: NaiveDate) -> Option<DailySales> {
        lock::read(&self.state)
            .days
            .get(&(vendor_id.clone(), date))
            .cloned()
    }
}

impl Projection for DailySalesView {
    fn name(&self) -> &'static str {
        "DailySalesView"
    }

    fn handle(&self, event: &EventEnvelope) -> Result<()> {
        let mut state = lock::write(&self.state);

        if let OrderEvent::OrderPlaced(data) = &event.event {
            let date = data.placed_at.date_naive();
            let day = state
                .days
                .entry((data.vendor_id.clone(), date))
                .or_insert_with(|| DailySales {
                    vendor_id: data.vendor_id.clone(),
                    date,
                    total_sales: Money::zero(),
                    total_orders: 0,
                });
            day.total_sales += data.total_price;
            day.total_orders += 1;
        }

        state.position = state.position.advance();
        Ok(())
    }

    fn position(&self) -> ProjectionPosition {
        lock::read(&self.state).position
    }

    fn reset(&self) -> Result<()> {
        *lock::write(&self.state) = DailySalesState::default();
        Ok(())
    }
}

impl ReadModel for DailySalesView {
    fn name(&self) -> &'static str {
        "DailySalesView"
    }

    fn count(&self) -> usize {
        lock::read(&self.state).days.len()
    }
}
