//! Board-facing and storage-facing task status vocabularies.

use serde::{Deserialize, Serialize};

/// Task status as shown on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not yet started.
    Backlog,
    /// Actively being worked on.
    InProgress,
    /// Awaiting review.
    Review,
    /// Finished.
    Complete,
}

impl TaskStatus {
    /// Returns the canonical board-facing representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Complete => "complete",
        }
    }
}

/// Task status as persisted and transported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageStatus {
    /// Storage counterpart of [`TaskStatus::Backlog`].
    Todo,
    /// Storage counterpart of [`TaskStatus::InProgress`].
    Doing,
    /// Storage counterpart of [`TaskStatus::Review`]; the overlap is exact.
    Review,
    /// Storage counterpart of [`TaskStatus::Complete`].
    Done,
}

impl StorageStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Parses a persisted status string, falling back to [`Self::Todo`] on
    /// unknown input.
    ///
    /// The fallback is a deliberate fail-open default for malformed values
    /// from older persisted data, used only as a last resort.
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "doing" => Self::Doing,
            "review" => Self::Review,
            "done" => Self::Done,
            _ => Self::Todo,
        }
    }
}

impl From<TaskStatus> for StorageStatus {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Backlog => Self::Todo,
            TaskStatus::InProgress => Self::Doing,
            TaskStatus::Review => Self::Review,
            TaskStatus::Complete => Self::Done,
        }
    }
}

impl From<StorageStatus> for TaskStatus {
    fn from(status: StorageStatus) -> Self {
        match status {
            StorageStatus::Todo => Self::Backlog,
            StorageStatus::Doing => Self::InProgress,
            StorageStatus::Review => Self::Review,
            StorageStatus::Done => Self::Complete,
        }
    }
}
