//! Command results.

use common::Version;

use crate::aggregate::Aggregate;

/// Result of executing a command against an aggregate.
#[derive(Debug, Clone)]
pub struct CommandResult<A: Aggregate> {
    /// The aggregate after applying the new events.
    pub aggregate: A,

    /// The events that were generated and recorded.
    pub events: Vec<A::Event>,

    /// The version of the aggregate after the command.
    pub new_version: Version,
}
