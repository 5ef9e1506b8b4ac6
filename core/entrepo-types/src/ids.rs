//! Identifier types used throughout entrepo.
//!
//! Identifiers are positive integers assigned by the owning repository or
//! by the caller. Zero is never a valid identifier.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Unique identifier for an entity within a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct EntityId(NonZeroU64);

impl EntityId {
    /// The smallest valid identifier (`1`).
    pub const MIN: Self = Self(NonZeroU64::MIN);

    /// Creates an entity ID, rejecting zero.
    pub fn new(raw: u64) -> Result<Self> {
        NonZeroU64::new(raw)
            .map(Self)
            .ok_or_else(|| Error::InvalidId(raw.to_string()))
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0.get()
    }

    /// Returns the identifier immediately after this one, or `None` at `u64::MAX`.
    #[must_use]
    pub const fn successor(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::InvalidId(s.to_string()))?;
        Self::new(raw)
    }
}

impl TryFrom<u64> for EntityId {
    type Error = Error;

    fn try_from(raw: u64) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.get()
    }
}

impl From<NonZeroU64> for EntityId {
    fn from(raw: NonZeroU64) -> Self {
        Self(raw)
    }
}
