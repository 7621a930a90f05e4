//! Order status machine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fulfilment status of an order.
///
/// Status only moves forward, one step at a time:
/// ```text
/// Pending ──► Preparing ──► Ready
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, not yet picked up by the kitchen.
    #[default]
    Pending,

    /// The kitchen is working on it.
    Preparing,

    /// Ready for pickup (terminal).
    Ready,
}

impl OrderStatus {
    /// Returns the only status this one may advance to, if any.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => None,
        }
    }

    /// Returns true if `requested` is the single legal next step.
    pub fn can_advance_to(&self, requested: OrderStatus) -> bool {
        self.next() == Some(requested)
    }

    /// Returns true while the vendor still has work to do on the order.
    pub fn is_active(&self) -> bool {
        !self.is_completed()
    }

    /// Returns true once the order is ready (terminal state).
    pub fn is_completed(&self) -> bool {
        matches!(self, OrderStatus::Ready)
    }

    /// Label for the vendor action that advances from this status.
    pub fn next_action_label(&self) -> Option<&'static str> {
        match self {
            OrderStatus::Pending => Some("Start Preparing"),
            OrderStatus::Preparing => Some("Mark as Ready"),
            OrderStatus::Ready => None,
        }
    }

    /// Returns the status name as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status string outside `pending | preparing | ready`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}
