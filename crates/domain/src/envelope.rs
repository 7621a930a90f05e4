//! Journal entries for recorded order events.

use chrono::{DateTime, Utc};
use common::{OrderId, Version};
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;
use crate::order::OrderEvent;

/// An order event together with its position in the journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Position in the journal, starting at 1.
    pub sequence: u64,

    /// The order the event belongs to.
    pub order_id: OrderId,

    /// Order version after this event.
    pub version: Version,

    /// Event type name, e.g. `"OrderPlaced"`.
    pub event_type: String,

    /// When the event was recorded.
    pub recorded_at: DateTime<Utc>,

    /// The event itself.
    pub event: OrderEvent,
}

impl EventEnvelope {
    /// Wraps an event for the journal.
    pub fn new(sequence: u64, order_id: OrderId, version: Version, event: OrderEvent) -> Self {
        Self {
            sequence,
            order_id,
            version,
            event_type: event.event_type().to_string(),
            recorded_at: Utc::now(),
            event,
        }
    }
}
