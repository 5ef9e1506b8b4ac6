//! Entity lifecycle event publishers for entrepo.
//!
//! A publisher is a sink: it consumes the entities a repository hands it
//! after each create, update or delete, and never produces entities of its
//! own. That makes narrowing safe. A publisher written for the general view
//! (`dyn Entity`) can serve any specific variant through [`Narrowed`], while
//! a variant-specific publisher can never be handed general entities.
//!
//! # Provided publishers
//!
//! - [`CustomerEventPublisher`], [`OrderEventPublisher`]: log variant-specific lines
//! - [`GenericEventPublisher`]: logs identifiers for any entity
//! - [`RecordingPublisher`]: captures notifications in memory

mod error;
mod logging;
mod publisher;
mod recording;

pub use error::{PublishError, PublishResult};
pub use logging::{CustomerEventPublisher, GenericEventPublisher, OrderEventPublisher};
pub use publisher::{EventPublisher, EventPublisherExt, Narrowed};
pub use recording::RecordingPublisher;
