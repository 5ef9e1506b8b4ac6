//! In-memory capture of lifecycle notifications.
//!
//! Primary use case is tests and the audit trail of the demo driver.

use crate::{EventPublisher, PublishError, PublishResult};
use entrepo_model::{Entity, EntityHeader};
use entrepo_types::LifecycleEvent;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Records every notification it receives, in arrival order.
///
/// `RecordingPublisher<V>` keeps full clones of a specific variant.
/// `RecordingPublisher<EntityHeader>` serves the general view and keeps
/// the header of each entity.
///
/// A recorder built with [`RecordingPublisher::failing_on`] still records
/// the matching notification, then rejects it.
///
/// A panic while the log is locked does not lose what was recorded; later
/// reads and writes keep using the same log.
#[derive(Debug)]
pub struct RecordingPublisher<T> {
    events: Mutex<Vec<(LifecycleEvent, T)>>,
    fail_on: Option<LifecycleEvent>,
}

impl<T> Default for RecordingPublisher<T> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }
}

impl<T> RecordingPublisher<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that rejects every `event` notification.
    pub fn failing_on(event: LifecycleEvent) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail_on: Some(event),
        }
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<(LifecycleEvent, T)>
    where
        T: Clone,
    {
        self.log().to_vec()
    }

    /// Number of recorded notifications of kind `event`.
    pub fn count(&self, event: LifecycleEvent) -> usize {
        self.log().iter().filter(|(kind, _)| *kind == event).count()
    }

    pub fn len(&self) -> usize {
        self.log().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.log().clear();
    }

    fn log(&self) -> MutexGuard<'_, Vec<(LifecycleEvent, T)>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, event: LifecycleEvent, entity: &dyn Entity, value: T) -> PublishResult<()> {
        self.log().push((event, value));
        if self.fail_on == Some(event) {
            return Err(PublishError::Rejected {
                event,
                entity_type: entity.entity_type(),
                id: entity.id(),
            });
        }
        Ok(())
    }
}

impl<V> EventPublisher<V> for RecordingPublisher<V>
where
    V: Entity + Clone + Send,
{
    fn on_create(&self, entity: &V) -> PublishResult<()> {
        self.record(LifecycleEvent::Created, entity, entity.clone())
    }

    fn on_update(&self, entity: &V) -> PublishResult<()> {
        self.record(LifecycleEvent::Updated, entity, entity.clone())
    }

    fn on_delete(&self, entity: &V) -> PublishResult<()> {
        self.record(LifecycleEvent::Deleted, entity, entity.clone())
    }
}

impl EventPublisher<dyn Entity> for RecordingPublisher<EntityHeader> {
    fn on_create(&self, entity: &dyn Entity) -> PublishResult<()> {
        self.record(LifecycleEvent::Created, entity, entity.header())
    }

    fn on_update(&self, entity: &dyn Entity) -> PublishResult<()> {
        self.record(LifecycleEvent::Updated, entity, entity.header())
    }

    fn on_delete(&self, entity: &dyn Entity) -> PublishResult<()> {
        self.record(LifecycleEvent::Deleted, entity, entity.header())
    }
}
