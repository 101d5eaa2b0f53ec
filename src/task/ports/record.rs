//! Storage-domain wire shape for a task.

use crate::task::domain::{RemoteTaskData, StorageStatus, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Task as serialized by the backend and the realtime channel.
///
/// Fields the backend may omit are optional here; [`Self::into_task`]
/// normalizes them to the board defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Server-issued identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Storage-domain status.
    pub status: StorageStatus,
    /// Optional assignee name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Optional fractional sort key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_order: Option<f64>,
    /// Optional feature grouping label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    /// Optional feature colour.
    #[serde(default, rename = "featureColor", skip_serializing_if = "Option::is_none")]
    pub feature_color: Option<String>,
}

impl TaskRecord {
    /// Converts the wire record into a domain task.
    ///
    /// The status is mapped into the board domain and absent optional fields
    /// take the board defaults. `last_update` seeds the logical
    /// conflict-resolution timestamp on the resulting task.
    #[must_use]
    pub fn into_task(self, last_update: i64) -> Task {
        Task::from_remote(RemoteTaskData {
            id: self.id,
            title: self.title,
            description: self.description,
            status: self.status.into(),
            assignee: self.assignee,
            feature: self.feature,
            feature_color: self.feature_color,
            task_order: self.task_order,
            last_update,
        })
    }
}
