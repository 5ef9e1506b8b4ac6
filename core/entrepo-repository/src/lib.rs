//! Entity repositories for entrepo.
//!
//! Two capabilities, split by what they do with the entity type:
//!
//! - [`ReadRepository`] only produces entities. A read-only repository of
//!   a specific variant can be widened to the general view with
//!   [`ReadRepositoryExt::widen`] (or [`ReadRepositoryExt::as_entities`]).
//! - [`Repository`] also consumes entities (`add`, `update`, `delete`).
//!   Nothing widens it; the only general view of a mutable repository is
//!   the read-only [`Widened`] adapter.
//!
//! [`InMemoryRepository`] stores one variant in insertion order and
//! reports every mutation to an optional [`EventPublisher`]. Publisher
//! failures propagate to the caller unchanged.
//!
//! [`EventPublisher`]: entrepo_events::EventPublisher

mod config;
mod memory;
mod read;
mod repository;

pub use config::{NotifyPolicy, RepositoryConfig};
pub use entrepo_events::{PublishError, PublishResult};
pub use memory::{CustomerRepository, InMemoryRepository, OrderRepository};
pub use read::{ReadRepository, ReadRepositoryExt, Widened};
pub use repository::Repository;
