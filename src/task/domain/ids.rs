//! Identifier types for the task domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier for a board task.
///
/// A confirmed task carries a server-issued identifier. A task created
/// optimistically, before the server has confirmed it, carries a locally
/// generated pending identifier distinguished by the `temp-` prefix. The
/// pending identifier is replaced wholesale once creation is confirmed;
/// identity changes exactly once per created task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Reserved prefix marking locally generated, unconfirmed identifiers.
    const PENDING_PREFIX: &'static str = "temp-";

    /// Creates a fresh pending identifier for an optimistic task.
    #[must_use]
    pub fn pending() -> Self {
        Self(format!("{}{}", Self::PENDING_PREFIX, Uuid::new_v4()))
    }

    /// Returns `true` when the identifier is a local pending one.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.0.starts_with(Self::PENDING_PREFIX)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
