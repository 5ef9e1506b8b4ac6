use chrono::{DateTime, Utc};
use entrepo_types::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity and audit fields shared by every entity variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMeta {
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

impl EntityMeta {
    /// An active entity created and last updated at `now`.
    #[must_use]
    pub const fn new(id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: now,
            updated_at: now,
            active: true,
        }
    }

    /// Marks the entity as modified at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    /// Clears the active flag and records the modification time.
    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.active = false;
        self.touch(now);
    }
}

/// The general entity view.
///
/// Implemented by every concrete variant. Repositories and publishers typed
/// at `dyn Entity` can read the shared fields of any variant, and recover
/// the variant through [`Entity::entity_type`] without downcasting.
pub trait Entity: fmt::Debug {
    /// The base identity/audit fields.
    fn meta(&self) -> &EntityMeta;

    /// The variant tag, e.g. `"Customer"`.
    fn entity_type(&self) -> &'static str;

    fn id(&self) -> EntityId {
        self.meta().id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.meta().created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.meta().updated_at
    }

    fn is_active(&self) -> bool {
        self.meta().active
    }

    /// Snapshot of the shared fields plus the variant tag.
    fn header(&self) -> EntityHeader {
        let meta = self.meta();
        EntityHeader {
            entity_type: self.entity_type(),
            id: meta.id,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
            active: meta.active,
        }
    }
}

/// Owned snapshot of an entity's general view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityHeader {
    pub entity_type: &'static str,
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

impl fmt::Display for EntityHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Entity Type: {}", self.entity_type)?;
        writeln!(f, "Id: {}", self.id)?;
        writeln!(f, "Created at: {}", self.created_at)?;
        writeln!(f, "Updated at: {}", self.updated_at)?;
        write!(f, "Active: {}", self.active)
    }
}

/// Witness that `&Self` may be viewed as `&G`.
///
/// Producers (read-only repositories) widen along this relation, consumers
/// (publishers) narrow along it. Every sized [`Entity`] upcasts to
/// `dyn Entity`; nothing upcasts from `dyn Entity` to a concrete variant.
///
/// ```compile_fail
/// use entrepo_model::{Customer, Entity, Upcast};
///
/// fn wants_customer(_: &Customer) {}
///
/// fn general(entity: &dyn Entity) {
///     // A general entity is not known to be a Customer.
///     wants_customer(entity.upcast());
/// }
/// ```
pub trait Upcast<G: ?Sized> {
    fn upcast(&self) -> &G;
}

impl<V: Entity + 'static> Upcast<dyn Entity> for V {
    fn upcast(&self) -> &(dyn Entity + 'static) {
        self
    }
}

/// Views a sequence of one variant as a sequence of general entities.
///
/// The sequence is neither filtered nor reordered.
pub fn widen_all<'a, V, I>(items: I) -> impl Iterator<Item = &'a dyn Entity>
where
    V: Entity + 'a,
    I: IntoIterator<Item = &'a V>,
{
    items.into_iter().map(|item| item as &dyn Entity)
}
