//! Projection processor for feeding journal entries to projections.

use domain::EventEnvelope;

use crate::projection::Projection;
use crate::{ProjectionError, Result};

/// Delivers journal entries to registered projections.
///
/// The processor supports:
/// - Catch-up: feeds a run of journal entries to each projection that hasn't
///   already seen them
/// - Rebuild: resets all projections and replays from scratch
#[derive(Default)]
pub struct ProjectionProcessor {
    projections: Vec<Box<dyn Projection>>,
}

impl ProjectionProcessor {
    /// Creates a processor with no projections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a projection with this processor.
    pub fn register(&mut self, projection: Box<dyn Projection>) {
        self.projections.push(projection);
    }

    /// Returns the number of registered projections.
    pub fn projection_count(&self) -> usize {
        self.projections.len()
    }

    /// Delivers `events` to each projection that hasn't already seen them.
    ///
    /// `events` is either the whole journal or a tail of it; entries at or
    /// below a projection's position are skipped. A projection that would miss
    /// an entry gets [`ProjectionError::SequenceGap`]. Returns the number of
    /// deliveries made.
    #[tracing::instrument(skip(self, events), fields(entries = events.len()))]
    pub fn run_catch_up(&self, events: &[EventEnvelope]) -> Result<u64> {
        let mut delivered: u64 = 0;

        for event in events {
            for projection in &self.projections {
                let pos = projection.position();
                if event.sequence <= pos.events_processed {
                    continue;
                }
                if event.sequence != pos.next_sequence() {
                    return Err(ProjectionError::SequenceGap {
                        projection: projection.name(),
                        expected: pos.next_sequence(),
                        found: event.sequence,
                    });
                }

                projection.handle(event)?;
                delivered += 1;
                metrics::counter!("projections_events_processed").increment(1);
            }
        }

        tracing::debug!(delivered, "catch-up complete");

        Ok(delivered)
    }

    /// Resets all projections and replays `journal` from the start.
    #[tracing::instrument(skip(self, journal))]
    pub fn rebuild_all(&self, journal: &[EventEnvelope]) -> Result<u64> {
        for projection in &self.projections {
            projection.reset()?;
        }
        let delivered = self.run_catch_up(journal)?;
        tracing::info!(projections = self.projections.len(), "projections rebuilt");
        Ok(delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionPosition;
    use domain::{Aggregate, CustomerId, Money, OrderItem, OrderService, OrderStatus, VendorId};
    use std::sync::{Arc, RwLock};

    /// A simple counting projection for testing.
    struct CountingProjection {
        count: Arc<RwLock<u64>>,
        position: Arc<RwLock<ProjectionPosition>>,
    }

    impl CountingProjection {
        fn new() -> Self {
            Self {
                count: Arc::new(RwLock::new(0)),
                position: Arc::new(RwLock::new(ProjectionPosition::zero())),
            }
        }
    }

    impl Projection for CountingProjection {
        fn name(&self) -> &'static str {
            "CountingProjection"
        }

        fn handle(&self, _event: &EventEnvelope) -> Result<()> {
            *self.count.write().unwrap() += 1;
            let mut pos = self.position.write().unwrap();
            *pos = pos.advance();
            Ok(())
        }

        fn position(&self) -> ProjectionPosition {
            *self.position.read().unwrap()
        }

        fn reset(&self) -> Result<()> {
            *self.count.write().unwrap() = 0;
            *self.position.write().unwrap() = ProjectionPosition::zero();
            Ok(())
        }
    }

    /// An order book holding one order advanced to ready: three journal entries.
    fn service_with_events() -> OrderService {
        let mut service = OrderService::new();
        let order_id = service
            .create_order(
                CustomerId::new("1"),
                vec![OrderItem::new("1", "Idli Sambar", Money::from_major(45), 1)],
                VendorId::new("2"),
            )
            .unwrap()
            .aggregate
            .id();
        service.advance_status(order_id, OrderStatus::Preparing).unwrap();
        service.advance_status(order_id, OrderStatus::Ready).unwrap();
        service
    }

    #[test]
    fn test_catch_up_processes_all_events() {
        let service = service_with_events();

        let projection = CountingProjection::new();
        let count_ref = Arc::clone(&projection.count);
        let mut processor = ProjectionProcessor::new();
        processor.register(Box::new(projection));

        let delivered = processor.run_catch_up(service.journal()).unwrap();

        assert_eq!(delivered, 3);
        assert_eq!(*count_ref.read().unwrap(), 3);
    }

    #[test]
    fn test_redelivered_entry_is_not_double_counted() {
        let service = service_with_events();
        let projection = CountingProjection::new();
        let count_ref = Arc::clone(&projection.count);

        let mut processor = ProjectionProcessor::new();
        processor.register(Box::new(projection));

        let first = &service.journal()[..1];
        assert_eq!(processor.run_catch_up(first).unwrap(), 1);
        assert_eq!(processor.run_catch_up(first).unwrap(), 0);

        assert_eq!(*count_ref.read().unwrap(), 1);
    }

    #[test]
    fn test_rebuild_resets_and_replays() {
        let service = service_with_events();

        let projection = CountingProjection::new();
        let count_ref = Arc::clone(&projection.count);
        let pos_ref = Arc::clone(&projection.position);

        let mut processor = ProjectionProcessor::new();
        processor.register(Box::new(projection));

        processor.run_catch_up(service.journal()).unwrap();
        assert_eq!(*count_ref.read().unwrap(), 3);

        processor.rebuild_all(service.journal()).unwrap();
        assert_eq!(*count_ref.read().unwrap(), 3);
        assert_eq!(pos_ref.read().unwrap().events_processed, 3);
    }

    #[test]
    fn test_catch_up_skips_already_processed() {
        let service = service_with_events();

        let projection = CountingProjection::new();
        let count_ref = Arc::clone(&projection.count);

        let mut processor = ProjectionProcessor::new();
        processor.register(Box::new(projection));

        processor.run_catch_up(service.journal()).unwrap();
        assert_eq!(*count_ref.read().unwrap(), 3);

        let delivered = processor.run_catch_up(service.journal()).unwrap();
        assert_eq!(delivered, 0);
        assert_eq!(*count_ref.read().unwrap(), 3);
    }

    #[test]
    fn test_catch_up_from_tail() {
        let service = service_with_events();

        let projection = CountingProjection::new();
        let count_ref = Arc::clone(&projection.count);

        let mut processor = ProjectionProcessor::new();
        processor.register(Box::new(projection));

        processor.run_catch_up(service.events_since(0)).unwrap();
        processor.run_catch_up(service.events_since(2)).unwrap();
        assert_eq!(*count_ref.read().unwrap(), 3);
    }

    #[test]
    fn test_catch_up_detects_gap() {
        let service = service_with_events();

        let mut processor = ProjectionProcessor::new();
        processor.register(Box::new(CountingProjection::new()));

        let result = processor.run_catch_up(service.events_since(1));
        assert!(matches!(
            result,
            Err(ProjectionError::SequenceGap {
                expected: 1,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_journal_catch_up() {
        let projection = CountingProjection::new();
        let count_ref = Arc::clone(&projection.count);

        let mut processor = ProjectionProcessor::new();
        processor.register(Box::new(projection));

        assert_eq!(processor.run_catch_up(&[]).unwrap(), 0);
        assert_eq!(*count_ref.read().unwrap(), 0);
    }

    #[test]
    fn test_multiple_projections() {
        let service = service_with_events();

        let proj1 = CountingProjection::new();
        let proj2 = CountingProjection::new();
        let count1 = Arc::clone(&proj1.count);
        let count2 = Arc::clone(&proj2.count);

        let mut processor = ProjectionProcessor::new();
        processor.register(Box::new(proj1));
        processor.register(Box::new(proj2));
        assert_eq!(processor.projection_count(), 2);

        let delivered = processor.run_catch_up(service.journal()).unwrap();

        assert_eq!(delivered, 6);
        assert_eq!(*count1.read().unwrap(), 3);
        assert_eq!(*count2.read().unwrap(), 3);
    }
}
