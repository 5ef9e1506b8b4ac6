use crate::PublishResult;
use entrepo_model::Upcast;
use entrepo_types::LifecycleEvent;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Sink for entity lifecycle notifications of variant `V`.
///
/// `V` only ever appears as an input, so a publisher of a general view can
/// stand in for a publisher of any more specific variant (see [`Narrowed`]).
/// The opposite substitution does not type-check:
///
/// ```compile_fail
/// use std::sync::Arc;
/// use entrepo_events::{CustomerEventPublisher, EventPublisher};
/// use entrepo_model::Entity;
///
/// // A Customer publisher cannot be fed arbitrary entities.
/// let general: Arc<dyn EventPublisher<dyn Entity>> = Arc::new(CustomerEventPublisher);
/// ```
pub trait EventPublisher<V: ?Sized>: Send + Sync {
    /// Called after an entity has been appended.
    fn on_create(&self, entity: &V) -> PublishResult<()>;

    /// Called after an update, with the entity the caller supplied.
    fn on_update(&self, entity: &V) -> PublishResult<()>;

    /// Called after a delete, with the entity the caller supplied.
    fn on_delete(&self, entity: &V) -> PublishResult<()>;

    /// Dispatches to the callback matching `event`.
    fn publish(&self, event: LifecycleEvent, entity: &V) -> PublishResult<()> {
        match event {
            LifecycleEvent::Created => self.on_create(entity),
            LifecycleEvent::Updated => self.on_update(entity),
            LifecycleEvent::Deleted => self.on_delete(entity),
        }
    }
}

impl<V: ?Sized, P: EventPublisher<V> + ?Sized> EventPublisher<V> for &P {
    fn on_create(&self, entity: &V) -> PublishResult<()> {
        (**self).on_create(entity)
    }

    fn on_update(&self, entity: &V) -> PublishResult<()> {
        (**self).on_update(entity)
    }

    fn on_delete(&self, entity: &V) -> PublishResult<()> {
        (**self).on_delete(entity)
    }
}

impl<V: ?Sized, P: EventPublisher<V> + ?Sized> EventPublisher<V> for Arc<P> {
    fn on_create(&self, entity: &V) -> PublishResult<()> {
        (**self).on_create(entity)
    }

    fn on_update(&self, entity: &V) -> PublishResult<()> {
        (**self).on_update(entity)
    }

    fn on_delete(&self, entity: &V) -> PublishResult<()> {
        (**self).on_delete(entity)
    }
}

impl<V: ?Sized, P: EventPublisher<V> + ?Sized> EventPublisher<V> for Box<P> {
    fn on_create(&self, entity: &V) -> PublishResult<()> {
        (**self).on_create(entity)
    }

    fn on_update(&self, entity: &V) -> PublishResult<()> {
        (**self).on_update(entity)
    }

    fn on_delete(&self, entity: &V) -> PublishResult<()> {
        (**self).on_delete(entity)
    }
}

/// A publisher of general view `G` serving as a publisher of any `V` that
/// upcasts to `G`.
///
/// Every notification is forwarded with the same entity, viewed as `G`.
pub struct Narrowed<P, G: ?Sized> {
    inner: P,
    _general: PhantomData<fn(&G)>,
}

impl<P, G: ?Sized> Narrowed<P, G>
where
    P: EventPublisher<G>,
{
    pub const fn new(inner: P) -> Self {
        Self {
            inner,
            _general: PhantomData,
        }
    }
}

impl<P, G: ?Sized> Narrowed<P, G> {
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: fmt::Debug, G: ?Sized> fmt::Debug for Narrowed<P, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Narrowed").field("inner", &self.inner).finish()
    }
}

impl<P: Clone, G: ?Sized> Clone for Narrowed<P, G> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _general: PhantomData,
        }
    }
}

impl<P, G, V> EventPublisher<V> for Narrowed<P, G>
where
    P: EventPublisher<G>,
    G: ?Sized,
    V: Upcast<G>,
{
    fn on_create(&self, entity: &V) -> PublishResult<()> {
        self.inner.on_create(<V as Upcast<G>>::upcast(entity))
    }

    fn on_update(&self, entity: &V) -> PublishResult<()> {
        self.inner.on_update(<V as Upcast<G>>::upcast(entity))
    }

    fn on_delete(&self, entity: &V) -> PublishResult<()> {
        self.inner.on_delete(<V as Upcast<G>>::upcast(entity))
    }
}

/// Narrowing for any publisher.
pub trait EventPublisherExt {
    /// Lets a publisher of `G` serve every variant that upcasts to `G`.
    fn narrow<G: ?Sized>(self) -> Narrowed<Self, G>
    where
        Self: EventPublisher<G> + Sized,
    {
        Narrowed::new(self)
    }
}

impl<P> EventPublisherExt for P {}
