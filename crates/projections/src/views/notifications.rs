//! Customer notifications raised when an order changes status.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use common::{CustomerId, OrderId};
use domain::{EventEnvelope, OrderEvent, OrderStatus};
use serde::Serialize;
use uuid::Uuid;

use crate::lock;
use crate::projection::{Projection, ProjectionPosition};
use crate::read_model::ReadModel;
use crate::{ProjectionError, Result};

/// Whether the customer has seen a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Unread,
    Read,
}

/// A message for a customer about one of their orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub order_id: OrderId,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: NotificationStatus,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }
}

/// Text shown for an order reaching `status`, if that status is announced.
fn message_for(order_id: OrderId, status: OrderStatus) -> Option<String> {
    let number = order_id.short();
    match status {
        OrderStatus::Pending => None,
        OrderStatus::Preparing => Some(format!("Your order #{number} is being prepared.")),
        OrderStatus::Ready => Some(format!("Your order #{number} is ready for pickup!")),
    }
}

#[derive(Default)]
struct NotificationsState {
    /// Notifications in the order they were raised.
    notifications: Vec<Notification>,
    order_to_customer: HashMap<OrderId, CustomerId>,
    position: ProjectionPosition,
}

/// Read model view for the customer's notification bell.
///
/// Read flags are set directly on the view; a rebuild raises every
/// notification afresh as unread.
#[derive(Clone, Default)]
pub struct NotificationsView {
    state: Arc<RwLock<NotificationsState>>,
}

impl NotificationsView {
    /// Creates a new empty notifications view.
    pub fn new() -> Self {
        Self::default()
    }

    /// A customer's notifications, newest first.
    pub fn for_customer(&self, customer_id: &CustomerId) -> Vec<Notification> {
        lock::read(&self.state)
            .notifications
            .iter()
            .rev()
            .filter(|n| &n.customer_id == customer_id)
            .cloned()
            .collect()
    }

    pub fn unread_count(&self, customer_id: &CustomerId) -> usize {
        lock::read(&self.state)
            .notifications
            .iter()
            .filter(|n| &n.customer_id == customer_id && n.is_unread())
            .count()
    }

    /// Marks one notification read. Returns false if there is no such notification.
    pub fn mark_read(&self, id: Uuid) -> bool {
        let mut state = lock::write(&self.state);
        match state.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.status = NotificationStatus::Read;
                true
            }
            None => false,
        }
    }

    /// Marks all of a customer's notifications read, returning how many changed.
    pub fn mark_all_read(&self, customer_id: &CustomerId) -> usize {
        let mut state = lock::write(&self.state);
        let mut changed = 0;
        for notification in state
            .notifications
            .iter_mut()
            .filter(|n| &n.customer_id == customer_id && n.is_unread())
        {
            notification.status = NotificationStatus::Read;
            changed += 1;
        }
        changed
    }
}

impl Projection for NotificationsView {
    fn name(&self) -> &'static str {
        "NotificationsView"
    }

    fn handle(&self, event: &EventEnvelope) -> Result<()> {
        let mut state = lock::write(&self.state);

        match &event.event {
            OrderEvent::OrderPlaced(data) => {
                state
                    .order_to_customer
                    .insert(data.order_id, data.customer_id.clone());
            }
            OrderEvent::StatusAdvanced(data) => {
                let Some(customer_id) = state.order_to_customer.get(&event.order_id).cloned()
                else {
                    return Err(ProjectionError::UnknownOrder {
                        projection: "NotificationsView",
                        order_id: event.order_id,
                    });
                };

                if let Some(message) = message_for(event.order_id, data.to) {
                    tracing::debug!(order_id = %event.order_id, %customer_id, "notification raised");
                    state.notifications.push(Notification {
                        id: Uuid::new_v4(),
                        customer_id,
                        order_id: event.order_id,
                        message,
                        created_at: data.advanced_at,
                        status: NotificationStatus::Unread,
                    });
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
        *lock::write(&self.state) = NotificationsState::default();
        Ok(())
    }
}

impl ReadModel for NotificationsView {
    fn name(&self) -> &'static str {
        "NotificationsView"
    }

    fn count(&self) -> usize {
        lock::read(&self.state).notifications.len()
    }
}
