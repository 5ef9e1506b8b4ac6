//! Error types for event publishers.

use entrepo_types::{EntityId, LifecycleEvent};
use thiserror::Error;

/// Result type for publisher callbacks.
pub type PublishResult<T> = Result<T, PublishError>;

/// Errors a publisher callback may raise.
///
/// Repositories never catch these; they reach the caller of the mutating
/// operation unchanged.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The publisher refused a notification.
    #[error("publisher rejected {event} notification for {entity_type} {id}")]
    Rejected {
        event: LifecycleEvent,
        entity_type: &'static str,
        id: EntityId,
    },
}
