//! Entity model for entrepo.
//!
//! Defines the shapes every repository and publisher is parameterized by:
//! - [`Entity`]: the general view (identifier, timestamps, active flag, type tag)
//! - [`EntityMeta`]: the base identity/audit fields every variant embeds
//! - [`Customer`], [`Order`]: concrete variants
//! - [`Upcast`]: compile-time witness that a variant may be viewed as a more
//!   general type; the only way a specific variant becomes `dyn Entity`
//! - [`SampleData`]: representative seed entities per variant
//!
//! Variants never convert into one another. The general view is a trait
//! object, so code written against `dyn Entity` can read any variant but can
//! never construct or store one.

mod customer;
mod entity;
mod order;
mod sample;

pub use customer::Customer;
pub use entity::{Entity, EntityHeader, EntityMeta, Upcast, widen_all};
pub use entrepo_types::EntityId;
pub use order::Order;
pub use sample::SampleData;
