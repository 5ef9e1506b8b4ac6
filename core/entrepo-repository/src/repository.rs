use crate::ReadRepository;
use entrepo_events::PublishResult;

/// A read-only repository that also accepts entities of variant `V`.
///
/// Because `V` is consumed, a mutable repository is never usable as one of
/// a more general type. The general view of a repository is read-only:
///
/// ```compile_fail
/// use entrepo_model::{EntityId, EntityMeta, Order};
/// use entrepo_repository::{CustomerRepository, ReadRepositoryExt, Repository};
///
/// let mut customers = CustomerRepository::seeded(None);
/// let order = Order::new(EntityMeta::new(EntityId::MIN, chrono::Utc::now()), "ORD001", chrono::Utc::now());
/// // The widened view has no `add`; an Order can never reach a Customer store.
/// customers.as_entities().add(order);
/// ```
///
/// and there is no mutable repository of the general view to substitute
/// into:
///
/// ```compile_fail
/// use entrepo_model::Entity;
/// use entrepo_repository::{CustomerRepository, Repository};
///
/// fn store_anything(_: &mut dyn Repository<dyn Entity>) {}
///
/// let mut customers = CustomerRepository::seeded(None);
/// store_anything(&mut customers);
/// ```
pub trait Repository<V>: ReadRepository<V> {
    /// Appends `entity`, then reports it as created.
    ///
    /// Identifiers are not checked for uniqueness.
    fn add(&mut self, entity: V) -> PublishResult<()>;

    /// Replaces the stored entity with the same identifier wholesale, then
    /// reports `entity` as updated.
    fn update(&mut self, entity: V) -> PublishResult<()>;

    /// Removes the first stored entity equal to `entity`, then reports
    /// `entity` as deleted.
    fn delete(&mut self, entity: &V) -> PublishResult<()>;
}
