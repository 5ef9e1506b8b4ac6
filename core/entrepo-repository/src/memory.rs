//! In-memory repositories.

use crate::{ReadRepository, Repository, RepositoryConfig};
use chrono::Utc;
use entrepo_events::{EventPublisher, PublishResult};
use entrepo_model::{Customer, Entity, Order, SampleData};
use entrepo_types::{EntityId, LifecycleEvent};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// In-memory customer store.
pub type CustomerRepository = InMemoryRepository<Customer>;

/// In-memory order store.
pub type OrderRepository = InMemoryRepository<Order>;

/// Stores entities of one variant in insertion order.
///
/// Every mutation updates the store first and then notifies the publisher.
/// Without a publisher, notifications are skipped.
pub struct InMemoryRepository<V> {
    items: Vec<V>,
    publisher: Option<Arc<dyn EventPublisher<V>>>,
    config: RepositoryConfig,
}

impl<V: Entity> InMemoryRepository<V> {
    /// Creates an empty repository.
    pub fn new(publisher: Option<Arc<dyn EventPublisher<V>>>) -> Self {
        Self::with_entities(Vec::new(), publisher)
    }

    /// Creates a repository holding `entities`, in the given order.
    pub fn with_entities(entities: Vec<V>, publisher: Option<Arc<dyn EventPublisher<V>>>) -> Self {
        Self {
            items: entities,
            publisher,
            config: RepositoryConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: RepositoryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn has_publisher(&self) -> bool {
        self.publisher.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The stored entities as a slice, in insertion order.
    pub fn as_slice(&self) -> &[V] {
        &self.items
    }

    /// One past the largest stored identifier, or [`EntityId::MIN`] when empty.
    ///
    /// Returns `None` once `u64::MAX` is stored; no larger identifier exists.
    pub fn next_id(&self) -> Option<EntityId> {
        match self.items.iter().map(Entity::id).max() {
            Some(largest) => largest.successor(),
            None => Some(EntityId::MIN),
        }
    }

    fn notify(&self, event: LifecycleEvent, entity: &V) -> PublishResult<()> {
        match &self.publisher {
            Some(publisher) => publisher.publish(event, entity),
            None => {
                debug!(
                    "No publisher configured, skipping {} notification for {} {}",
                    event,
                    entity.entity_type(),
                    entity.id()
                );
                Ok(())
            }
        }
    }

    fn notify_noop(&self, event: LifecycleEvent, entity: &V) -> PublishResult<()> {
        if self.config.notify.notifies_on_noop() {
            self.notify(event, entity)
        } else {
            debug!(
                "Store unchanged, suppressing {} notification for {} {}",
                event,
                entity.entity_type(),
                entity.id()
            );
            Ok(())
        }
    }
}

impl<V: SampleData> InMemoryRepository<V> {
    /// Creates a repository holding the variant's sample entities.
    pub fn seeded(publisher: Option<Arc<dyn EventPublisher<V>>>) -> Self {
        Self::with_entities(V::samples(Utc::now()), publisher)
    }
}

impl<V: Entity> fmt::Debug for InMemoryRepository<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryRepository")
            .field("items", &self.items)
            .field("has_publisher", &self.publisher.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl<V: Entity> ReadRepository<V> for InMemoryRepository<V> {
    fn get_all(&self) -> Vec<&V> {
        self.items.iter().collect()
    }

    fn find_by_id(&self, id: EntityId) -> Option<&V> {
        self.items.iter().find(|stored| stored.id() == id)
    }
}

impl<V: Entity + PartialEq> Repository<V> for InMemoryRepository<V> {
    fn add(&mut self, entity: V) -> PublishResult<()> {
        debug!("Adding {} {}", entity.entity_type(), entity.id());
        let index = self.items.len();
        self.items.push(entity);
        self.notify(LifecycleEvent::Created, &self.items[index])
    }

    fn update(&mut self, entity: V) -> PublishResult<()> {
        let id = entity.id();
        match self.items.iter().position(|stored| stored.id() == id) {
            Some(index) => {
                debug!("Replacing {} {}", entity.entity_type(), id);
                self.items[index] = entity;
                self.notify(LifecycleEvent::Updated, &self.items[index])
            }
            None => {
                debug!("No {} with id {} to update", entity.entity_type(), id);
                self.notify_noop(LifecycleEvent::Updated, &entity)
            }
        }
    }

    fn delete(&mut self, entity: &V) -> PublishResult<()> {
        match self.items.iter().position(|stored| stored == entity) {
            Some(index) => {
                debug!("Removing {} {}", entity.entity_type(), entity.id());
                self.items.remove(index);
                self.notify(LifecycleEvent::Deleted, entity)
            }
            None => {
                debug!("{} {} not stored, nothing to delete", entity.entity_type(), entity.id());
                self.notify_noop(LifecycleEvent::Deleted, entity)
            }
        }
    }
}
