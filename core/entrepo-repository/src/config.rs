use serde::{Deserialize, Serialize};

/// When `update` and `delete` notify the publisher.
///
/// `add` always notifies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotifyPolicy {
    /// Notify on every call, including updates of unknown identifiers and
    /// deletes of entities that are not stored.
    #[default]
    Always,
    /// Notify only when the store actually changed.
    OnChange,
}

impl NotifyPolicy {
    /// Whether a call that left the store untouched still notifies.
    #[must_use]
    pub const fn notifies_on_noop(&self) -> bool {
        matches!(self, Self::Always)
    }
}

/// Configuration for an in-memory repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    pub notify: NotifyPolicy,
}

impl RepositoryConfig {
    #[must_use]
    pub const fn with_notify(mut self, notify: NotifyPolicy) -> Self {
        self.notify = notify;
        self
    }
}
