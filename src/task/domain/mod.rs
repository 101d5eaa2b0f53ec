//! Domain model for task board reconciliation.
//!
//! The task domain models the board's central entity, its UI and storage
//! status vocabularies, and the fractional sort keys used for constant-time
//! reordering, while keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod ids;
pub mod order;
mod status;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use status::{StorageStatus, TaskStatus};
pub use task::{
    Assignee, RemoteTaskData, Task, TaskDraft, DEFAULT_ASSIGNEE, DEFAULT_FEATURE,
    DEFAULT_FEATURE_COLOR,
};
