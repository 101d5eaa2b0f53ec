//! Gateway port for task persistence behind the board.

use crate::task::domain::{StorageStatus, TaskId};
use crate::task::ports::record::TaskRecord;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Persistence contract for board tasks.
///
/// All operations cross the network and may fail; failures carry a
/// human-readable message. The gateway never mutates the board's in-memory
/// state; the store reconciles its own state from the returned values and
/// from realtime events.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Creates a task and returns the server-confirmed record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the request is rejected or times out.
    async fn create_task(&self, payload: CreateTaskPayload) -> GatewayResult<TaskRecord>;

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the request is rejected or times out.
    async fn update_task(&self, id: &TaskId, payload: UpdateTaskPayload) -> GatewayResult<()>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the request is rejected or times out.
    async fn delete_task(&self, id: &TaskId) -> GatewayResult<()>;

    /// Lists the feature labels defined for a project.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the request is rejected or times out.
    async fn project_features(&self, project_id: &str) -> GatewayResult<ProjectFeatures>;
}

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request was rejected or timed out; carries the backend message.
    #[error("{0}")]
    Network(String),
}

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTaskPayload {
    /// Project the task belongs to.
    pub project_id: String,
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Storage-domain status.
    pub status: StorageStatus,
    /// Assignee name.
    pub assignee: String,
    /// Fractional sort key.
    pub task_order: f64,
    /// Optional feature grouping label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    /// Optional feature colour.
    #[serde(rename = "featureColor", skip_serializing_if = "Option::is_none")]
    pub feature_color: Option<String>,
}

/// Partial request payload for updating a task.
///
/// Only present fields are sent; `client_timestamp` accompanies writes that
/// participate in conflict resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTaskPayload {
    /// New title, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New storage-domain status, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StorageStatus>,
    /// New assignee name, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// New fractional sort key, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_order: Option<f64>,
    /// New feature grouping label, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    /// New feature colour, if changed.
    #[serde(rename = "featureColor", skip_serializing_if = "Option::is_none")]
    pub feature_color: Option<String>,
    /// Client-side logical timestamp, milliseconds since epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_timestamp: Option<i64>,
}

/// Feature label defined on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFeature {
    /// Backend identifier, when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display label.
    pub label: String,
    /// Display colour, when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Response envelope for the project feature listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFeatures {
    /// Features defined on the project.
    #[serde(default)]
    pub features: Vec<ProjectFeature>,
}
