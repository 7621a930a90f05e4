//! Projection error types.

use common::OrderId;
use thiserror::Error;

/// Errors that can occur during projection processing.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// A journal entry arrived out of sequence.
    #[error("{projection} expected journal entry {expected}, got {found}")]
    SequenceGap {
        projection: &'static str,
        expected: u64,
        found: u64,
    },

    /// A status change for an order the projection never saw placed.
    #[error("{projection} has no record of order {order_id}")]
    UnknownOrder {
        projection: &'static str,
        order_id: OrderId,
    },
}

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;
