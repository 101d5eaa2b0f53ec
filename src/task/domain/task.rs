//! Task aggregate root and related board entity types.

use super::{TaskDomainError, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// Assignee name applied when none is supplied.
pub const DEFAULT_ASSIGNEE: &str = "User";

/// Feature grouping label applied when none is supplied.
pub const DEFAULT_FEATURE: &str = "General";

/// Feature colour applied when none is supplied.
pub const DEFAULT_FEATURE_COLOR: &str = "#3b82f6";

/// Person a task is assigned to.
///
/// The avatar is an unused placeholder carried for wire compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    name: String,
    avatar: String,
}

impl Assignee {
    /// Creates an assignee with an empty avatar placeholder.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: String::new(),
        }
    }

    /// Returns the assignee name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for Assignee {
    fn default() -> Self {
        Self::named(DEFAULT_ASSIGNEE)
    }
}

/// Task aggregate root, held in the board's in-memory collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    assignee: Assignee,
    feature: String,
    feature_color: String,
    task_order: f64,
    last_update: i64,
}

/// Parameter object for building a task from server-provided fields.
///
/// Absent optional fields normalize to the board defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteTaskData {
    /// Server-issued identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Board-facing status.
    pub status: TaskStatus,
    /// Optional assignee name.
    pub assignee: Option<String>,
    /// Optional feature grouping label.
    pub feature: Option<String>,
    /// Optional feature colour.
    pub feature_color: Option<String>,
    /// Optional fractional sort key.
    pub task_order: Option<f64>,
    /// Logical timestamp for conflict resolution, milliseconds since epoch.
    pub last_update: i64,
}

impl Task {
    /// Creates an optimistic task under a fresh pending identifier.
    #[must_use]
    pub fn from_draft(draft: TaskDraft, task_order: f64, now_ms: i64) -> Self {
        Self {
            id: TaskId::pending(),
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            status: draft.status,
            assignee: Assignee::named(non_empty_or(draft.assignee, DEFAULT_ASSIGNEE)),
            feature: non_empty_or(draft.feature, DEFAULT_FEATURE),
            feature_color: non_empty_or(draft.feature_color, DEFAULT_FEATURE_COLOR),
            task_order,
            last_update: now_ms,
        }
    }

    /// Builds a task from server-provided fields, normalizing defaults.
    #[must_use]
    pub fn from_remote(data: RemoteTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description.unwrap_or_default(),
            status: data.status,
            assignee: Assignee::named(non_empty_or(data.assignee, DEFAULT_ASSIGNEE)),
            feature: non_empty_or(data.feature, DEFAULT_FEATURE),
            feature_color: non_empty_or(data.feature_color, DEFAULT_FEATURE_COLOR),
            task_order: data.task_order.unwrap_or(0.0),
            last_update: data.last_update,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the board-facing status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee(&self) -> &Assignee {
        &self.assignee
    }

    /// Returns the feature grouping label.
    #[must_use]
    pub fn feature(&self) -> &str {
        &self.feature
    }

    /// Returns the feature colour.
    #[must_use]
    pub fn feature_color(&self) -> &str {
        &self.feature_color
    }

    /// Returns the fractional sort key within the status partition.
    #[must_use]
    pub const fn task_order(&self) -> f64 {
        self.task_order
    }

    /// Returns the logical conflict-resolution timestamp.
    #[must_use]
    pub const fn last_update(&self) -> i64 {
        self.last_update
    }

    /// Moves the task to another status partition at the given sort key.
    pub fn move_to(&mut self, status: TaskStatus, task_order: f64, now_ms: i64) {
        self.status = status;
        self.task_order = task_order;
        self.last_update = now_ms;
    }

    /// Moves the task to another feature group.
    pub fn set_feature(&mut self, feature: impl Into<String>, now_ms: i64) {
        self.feature = feature.into();
        self.last_update = now_ms;
    }

    /// Rewrites the sort key within the current status partition.
    pub fn set_order(&mut self, task_order: f64, now_ms: i64) {
        self.task_order = task_order;
        self.last_update = now_ms;
    }
}

/// Draft payload for creating a task, built up field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    assignee: Option<String>,
    feature: Option<String>,
    feature_color: Option<String>,
    task_order: Option<f64>,
}

impl TaskDraft {
    /// Creates a draft with the required title and status.
    #[must_use]
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            description: None,
            status,
            assignee: None,
            feature: None,
            feature_color: None,
            task_order: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee name.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the feature grouping label.
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = Some(feature.into());
        self
    }

    /// Sets the feature colour.
    #[must_use]
    pub fn with_feature_color(mut self, feature_color: impl Into<String>) -> Self {
        self.feature_color = Some(feature_color.into());
        self
    }

    /// Sets an explicit sort key instead of the partition default.
    #[must_use]
    pub const fn with_order(mut self, task_order: f64) -> Self {
        self.task_order = Some(task_order);
        self
    }

    /// Returns the draft title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the draft description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the target status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assignee name, if set.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns the feature grouping label, if set.
    #[must_use]
    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    /// Returns the feature colour, if set.
    #[must_use]
    pub fn feature_color(&self) -> Option<&str> {
        self.feature_color.as_deref()
    }

    /// Returns the explicit sort key, if set.
    #[must_use]
    pub const fn task_order(&self) -> Option<f64> {
        self.task_order
    }

    /// Validates the draft before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        if self.title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(())
    }
}

/// Substitutes the default when the value is absent or blank.
fn non_empty_or(value: Option<impl Into<String>>, default: &str) -> String {
    match value {
        Some(raw) => {
            let text = raw.into();
            if text.trim().is_empty() {
                default.to_owned()
            } else {
                text
            }
        }
        None => default.to_owned(),
    }
}
