//! Lifecycle event tags.
//!
//! A repository reports exactly three kinds of change to its publisher.
//! The tag carries no entity data; publishers receive the entity itself
//! alongside it.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of lifecycle change a repository reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// An entity was appended to a repository.
    Created,
    /// An entity was replaced by identifier.
    Updated,
    /// An entity was removed.
    Deleted,
}

impl LifecycleEvent {
    /// All lifecycle events, in the order a typical entity passes through them.
    pub const ALL: [Self; 3] = [Self::Created, Self::Updated, Self::Deleted];

    /// Returns the lowercase past-tense verb ("created", "updated", "deleted").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "updated" => Ok(Self::Updated),
            "deleted" => Ok(Self::Deleted),
            other => Err(Error::UnknownEvent(other.to_string())),
        }
    }
}
