use entrepo_model::{Entity, Upcast};
use entrepo_types::EntityId;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Enumeration and lookup over entities of variant `V`.
///
/// `V` is only ever produced, so a read-only repository of a specific
/// variant may be viewed as one of a more general type:
///
/// ```
/// use entrepo_model::Entity;
/// use entrepo_repository::{CustomerRepository, ReadRepository, ReadRepositoryExt};
///
/// fn count_active(repo: &dyn ReadRepository<dyn Entity>) -> usize {
///     repo.get_all().into_iter().filter(|e| e.is_active()).count()
/// }
///
/// let customers = CustomerRepository::seeded(None);
/// assert_eq!(count_active(&customers.as_entities()), 2);
/// ```
///
/// The general view cannot be narrowed back to a variant:
///
/// ```compile_fail
/// use entrepo_model::Customer;
/// use entrepo_repository::{CustomerRepository, ReadRepository, ReadRepositoryExt};
///
/// fn names(repo: &dyn ReadRepository<Customer>) -> Vec<String> {
///     repo.get_all().into_iter().map(|c| c.name.clone()).collect()
/// }
///
/// let customers = CustomerRepository::seeded(None);
/// let general = customers.as_entities();
/// names(&general);
/// ```
pub trait ReadRepository<V: ?Sized> {
    /// Every stored entity, in insertion order.
    fn get_all(&self) -> Vec<&V>;

    /// The first stored entity with identifier `id`, if any.
    fn find_by_id(&self, id: EntityId) -> Option<&V>;
}

impl<V: ?Sized, R: ReadRepository<V> + ?Sized> ReadRepository<V> for &R {
    fn get_all(&self) -> Vec<&V> {
        (**self).get_all()
    }

    fn find_by_id(&self, id: EntityId) -> Option<&V> {
        (**self).find_by_id(id)
    }
}

impl<V: ?Sized, R: ReadRepository<V> + ?Sized> ReadRepository<V> for Box<R> {
    fn get_all(&self) -> Vec<&V> {
        (**self).get_all()
    }

    fn find_by_id(&self, id: EntityId) -> Option<&V> {
        (**self).find_by_id(id)
    }
}

impl<V: ?Sized, R: ReadRepository<V> + ?Sized> ReadRepository<V> for Arc<R> {
    fn get_all(&self) -> Vec<&V> {
        (**self).get_all()
    }

    fn find_by_id(&self, id: EntityId) -> Option<&V> {
        (**self).find_by_id(id)
    }
}

/// A read-only repository of `V` viewed as a read-only repository of `G`.
///
/// Enumerates exactly the entities of the underlying repository, in the
/// same order. Only [`ReadRepository`] is implemented; mutation is never
/// reachable through a widened view.
pub struct Widened<'a, R: ?Sized, V, G: ?Sized> {
    inner: &'a R,
    _view: PhantomData<fn(&V) -> &G>,
}

impl<'a, R, V, G> Widened<'a, R, V, G>
where
    R: ReadRepository<V> + ?Sized,
    V: Upcast<G>,
    G: ?Sized,
{
    pub const fn new(inner: &'a R) -> Self {
        Self {
            inner,
            _view: PhantomData,
        }
    }
}

impl<'a, R: ?Sized, V, G: ?Sized> Widened<'a, R, V, G> {
    /// The underlying, variant-typed repository.
    pub const fn inner(&self) -> &'a R {
        self.inner
    }
}

impl<R: ?Sized, V, G: ?Sized> Clone for Widened<'_, R, V, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized, V, G: ?Sized> Copy for Widened<'_, R, V, G> {}

impl<R: fmt::Debug + ?Sized, V, G: ?Sized> fmt::Debug for Widened<'_, R, V, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widened").field("inner", &self.inner).finish()
    }
}

impl<R, V, G> ReadRepository<G> for Widened<'_, R, V, G>
where
    R: ReadRepository<V> + ?Sized,
    V: Upcast<G>,
    G: ?Sized,
{
    fn get_all(&self) -> Vec<&G> {
        self.inner
            .get_all()
            .into_iter()
            .map(<V as Upcast<G>>::upcast)
            .collect()
    }

    fn find_by_id(&self, id: EntityId) -> Option<&G> {
        self.inner.find_by_id(id).map(<V as Upcast<G>>::upcast)
    }
}

/// Widening for any read-only repository.
pub trait ReadRepositoryExt<V>: ReadRepository<V> {
    /// Views this repository as a read-only repository of `G`.
    fn widen<G: ?Sized>(&self) -> Widened<'_, Self, V, G>
    where
        V: Upcast<G>,
    {
        Widened::new(self)
    }

    /// Views this repository as a read-only repository of general entities.
    fn as_entities(&self) -> Widened<'_, Self, V, dyn Entity>
    where
        V: Upcast<dyn Entity>,
    {
        self.widen()
    }
}

impl<V, R: ReadRepository<V> + ?Sized> ReadRepositoryExt<V> for R {}
