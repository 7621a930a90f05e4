//! Core projection trait and position tracking.

use domain::EventEnvelope;

use crate::Result;

/// Tracks how many journal entries a projection has processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionPosition {
    /// Number of entries processed by this projection.
    pub events_processed: u64,
}

impl ProjectionPosition {
    /// Creates a new position at zero.
    pub fn zero() -> Self {
        Self {
            events_processed: 0,
        }
    }

    /// Advances the position by one entry.
    pub fn advance(&self) -> Self {
        Self {
            events_processed: self.events_processed + 1,
        }
    }

    /// Sequence number of the next entry this projection expects.
    pub fn next_sequence(&self) -> u64 {
        self.events_processed + 1
    }
}

impl std::fmt::Display for ProjectionPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "position({})", self.events_processed)
    }
}

/// A projection that folds journal entries into a read model.
///
/// Views hold their state behind a shared lock so a clone registered with the
/// [`ProjectionProcessor`](crate::ProjectionProcessor) and the clone kept for
/// queries see the same data.
pub trait Projection: Send + Sync {
    /// Returns the name of this projection.
    fn name(&self) -> &'static str;

    /// Handles a single journal entry, updating the projection's read model.
    fn handle(&self, event: &EventEnvelope) -> Result<()>;

    /// Returns the current position of this projection.
    fn position(&self) -> ProjectionPosition;

    /// Resets the projection to its initial state.
    fn reset(&self) -> Result<()>;
}
