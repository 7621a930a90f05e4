//! Core aggregate and domain event traits.

use common::Version;
use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Clone {
    /// Returns the event type name recorded in the journal.
    fn event_type(&self) -> &'static str;
}

/// Trait for aggregates whose state is derived from a stream of events.
///
/// Command methods on the aggregate validate input and return events; they
/// never mutate. [`Aggregate::apply`] is the only way state changes, so an
/// aggregate rebuilt from its journal is identical to the live one.
pub trait Aggregate: Sized {
    /// Identifier type of this aggregate.
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// The type of events this aggregate produces and consumes.
    type Event: DomainEvent;

    /// The type of errors its commands can produce.
    type Error: std::error::Error;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Returns the aggregate's identifier.
    fn id(&self) -> Self::Id;

    /// Returns the current version. Each applied event increments it by one.
    fn version(&self) -> Version;

    /// Builds the aggregate from the event that opens its stream.
    ///
    /// Returns `None` when the event cannot start a stream.
    fn from_first_event(event: Self::Event) -> Option<Self>;

    /// Applies an event to the aggregate, updating its state.
    ///
    /// Must be pure and deterministic, and must not fail: events are facts.
    fn apply(&mut self, event: Self::Event);

    /// Applies multiple events in sequence.
    fn apply_events(&mut self, events: impl IntoIterator<Item = Self::Event>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Rebuilds an aggregate by replaying its full event stream.
    fn replay(events: impl IntoIterator<Item = Self::Event>) -> Option<Self> {
        let mut events = events.into_iter();
        let mut aggregate = Self::from_first_event(events.next()?)?;
        aggregate.apply_events(events);
        Some(aggregate)
    }
}
