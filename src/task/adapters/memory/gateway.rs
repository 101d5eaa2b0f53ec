//! In-memory gateway for board reconciliation tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::task::domain::TaskId;
use crate::task::ports::{
    CreateTaskPayload, GatewayError, GatewayResult, ProjectFeature, ProjectFeatures, TaskGateway,
    TaskRecord, UpdateTaskPayload,
};

/// Thread-safe in-memory task gateway with scripted failure injection.
///
/// Records every call it receives so tests can assert on the exact wire
/// traffic the store produced, and issues sequential server identifiers
/// (`task-1`, `task-2`, ..) unless one is forced with
/// [`Self::assign_next_id`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskGateway {
    state: Arc<Mutex<InMemoryGatewayState>>,
}

#[derive(Debug, Default)]
struct InMemoryGatewayState {
    next_id: u64,
    forced_id: Option<String>,
    fail_next: Option<String>,
    creates: Vec<CreateTaskPayload>,
    updates: Vec<(TaskId, UpdateTaskPayload)>,
    deletes: Vec<TaskId>,
    features: Vec<ProjectFeature>,
}

impl InMemoryTaskGateway {
    /// Creates an empty in-memory gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway whose feature listing returns the given features.
    #[must_use]
    pub fn with_features(features: Vec<ProjectFeature>) -> Self {
        let gateway = Self::default();
        gateway.state().features = features;
        gateway
    }

    /// Makes the next gateway call fail with the given message.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.state().fail_next = Some(message.into());
    }

    /// Forces the identifier issued by the next create call.
    pub fn assign_next_id(&self, id: impl Into<String>) {
        self.state().forced_id = Some(id.into());
    }

    /// Returns every create payload received so far.
    #[must_use]
    pub fn created_payloads(&self) -> Vec<CreateTaskPayload> {
        self.state().creates.clone()
    }

    /// Returns every update call received so far.
    #[must_use]
    pub fn update_calls(&self) -> Vec<(TaskId, UpdateTaskPayload)> {
        self.state().updates.clone()
    }

    /// Returns every delete call received so far.
    #[must_use]
    pub fn delete_calls(&self) -> Vec<TaskId> {
        self.state().deletes.clone()
    }

    fn state(&self) -> MutexGuard<'_, InMemoryGatewayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn take_scripted_failure(&self) -> Option<GatewayError> {
        self.state().fail_next.take().map(GatewayError::Network)
    }
}

#[async_trait]
impl TaskGateway for InMemoryTaskGateway {
    async fn create_task(&self, payload: CreateTaskPayload) -> GatewayResult<TaskRecord> {
        if let Some(err) = self.take_scripted_failure() {
            return Err(err);
        }
        let mut state = self.state();
        let id = state.forced_id.take().unwrap_or_else(|| {
            state.next_id += 1;
            format!("task-{}", state.next_id)
        });
        let record = TaskRecord {
            id: TaskId::from(id),
            title: payload.title.clone(),
            description: payload.description.clone(),
            status: payload.status,
            assignee: Some(payload.assignee.clone()),
            task_order: Some(payload.task_order),
            feature: payload.feature.clone(),
            feature_color: payload.feature_color.clone(),
        };
        state.creates.push(payload);
        Ok(record)
    }

    async fn update_task(&self, id: &TaskId, payload: UpdateTaskPayload) -> GatewayResult<()> {
        if let Some(err) = self.take_scripted_failure() {
            return Err(err);
        }
        self.state().updates.push((id.clone(), payload));
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> GatewayResult<()> {
        if let Some(err) = self.take_scripted_failure() {
            return Err(err);
        }
        self.state().deletes.push(id.clone());
        Ok(())
    }

    async fn project_features(&self, _project_id: &str) -> GatewayResult<ProjectFeatures> {
        if let Some(err) = self.take_scripted_failure() {
            return Err(err);
        }
        Ok(ProjectFeatures {
            features: self.state().features.clone(),
        })
    }
}
