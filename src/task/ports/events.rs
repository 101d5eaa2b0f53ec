//! Message contract of the realtime task channel.
//!
//! The transport itself (socket lifecycle, retries, reconnection) is an
//! external collaborator; the store consumes decoded [`TaskEvent`] values in
//! arrival order and tolerates them in every [`ConnectionState`].

use crate::task::domain::TaskId;
use crate::task::ports::record::TaskRecord;
use serde::{Deserialize, Serialize};

/// Connection state reported by the realtime channel.
///
/// The store tracks the state but never drives reconnection; that is the
/// channel's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// No channel connection.
    Disconnected,
    /// Connection attempt in flight.
    Connecting,
    /// Channel delivering events.
    Connected,
}

/// Task lifecycle event pushed by the realtime channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum TaskEvent {
    /// A task was created.
    #[serde(rename = "task_created")]
    Created {
        /// The created task.
        data: TaskRecord,
        /// Server-side logical timestamp, milliseconds since epoch.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        server_timestamp: Option<i64>,
    },

    /// A task's fields changed.
    #[serde(rename = "task_updated")]
    Updated {
        /// The task's authoritative fields after the change.
        data: TaskRecord,
        /// Server-side logical timestamp, milliseconds since epoch.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        server_timestamp: Option<i64>,
    },

    /// A task was deleted.
    #[serde(rename = "task_deleted")]
    Deleted {
        /// Identifier of the removed task.
        id: TaskId,
    },

    /// A task was archived; the board treats this as removal.
    #[serde(rename = "task_archived")]
    Archived {
        /// Identifier of the archived task.
        id: TaskId,
    },

    /// Authoritative bulk resync of the full ordered collection.
    #[serde(rename = "tasks_reordered")]
    Reordered {
        /// The server-provided ordered set, replacing local state.
        tasks: Vec<TaskRecord>,
    },

    /// Full collection snapshot delivered once at channel connect.
    #[serde(rename = "initial_tasks")]
    InitialSnapshot {
        /// The snapshot contents, replacing local state.
        tasks: Vec<TaskRecord>,
    },
}
