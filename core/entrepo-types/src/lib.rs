//! Core type definitions for entrepo.
//!
//! This crate defines the fundamental, variant-agnostic types used by the
//! model, repository and event crates:
//! - Entity identifiers (positive integers)
//! - Lifecycle event tags (create, update, delete)
//!
//! Concrete entity shapes (customers, orders, ...) live in `entrepo-model`.

mod event;
mod ids;

pub use event::LifecycleEvent;
pub use ids::EntityId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid entity id: {0}")]
    InvalidId(String),

    #[error("unknown lifecycle event: {0}")]
    UnknownEvent(String),
}
