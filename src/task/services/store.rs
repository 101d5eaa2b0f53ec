//! Reconciliation store owning the board's in-memory task collection.
//!
//! The store applies local mutations optimistically, persists them through
//! the [`TaskGateway`] port, and merges inbound realtime events under
//! logical-timestamp conflict resolution. Rollback policy per operation:
//!
//! - create/delete: optimistic state reverted on gateway failure, error
//!   re-raised to the caller;
//! - status/feature moves: full pre-move snapshot restored and a
//!   [`StoreNotification`] published;
//! - reorders: never rolled back; a failed persist is logged and the
//!   realtime channel is relied on to correct divergence;
//! - plain field updates: never applied locally, so never rolled back.

use crate::task::domain::{
    order, Task, TaskDomainError, TaskDraft, TaskId, TaskStatus, DEFAULT_ASSIGNEE,
};
use crate::task::ports::{
    ConnectionState, CreateTaskPayload, GatewayError, ProjectFeature, TaskEvent, TaskGateway,
    TaskRecord, UpdateTaskPayload,
};
use mockable::Clock;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Trailing-edge window for coalescing reorder persistence.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(800);

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Domain validation failed before any network call.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The identifier is absent from local state.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The gateway rejected the request; carries its message verbatim.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Structured failure notification published for the presentation layer.
///
/// Replaces direct notification rendering from the state layer; subscribers
/// decide how (and whether) to surface each entry. Delivery is best-effort
/// and never blocks store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreNotification {
    /// A status move was rolled back after a gateway failure.
    MoveFailed {
        /// Task whose move was reverted.
        task_id: TaskId,
        /// Human-readable gateway message.
        message: String,
    },

    /// A feature move was rolled back after a gateway failure.
    FeatureMoveFailed {
        /// Task whose move was reverted.
        task_id: TaskId,
        /// Human-readable gateway message.
        message: String,
    },
}

/// Partial field changes for [`BoardStore::update_task`], built up field by
/// field. Only the set fields are sent to the gateway.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    assignee: Option<String>,
    task_order: Option<f64>,
    feature: Option<String>,
    feature_color: Option<String>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a new status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets a new assignee name.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets a new sort key.
    #[must_use]
    pub const fn with_order(mut self, task_order: f64) -> Self {
        self.task_order = Some(task_order);
        self
    }

    /// Sets a new feature grouping label.
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = Some(feature.into());
        self
    }

    /// Sets a new feature colour.
    #[must_use]
    pub fn with_feature_color(mut self, feature_color: impl Into<String>) -> Self {
        self.feature_color = Some(feature_color.into());
        self
    }

    fn into_payload(self, client_timestamp: i64) -> UpdateTaskPayload {
        UpdateTaskPayload {
            title: self.title,
            description: self.description,
            status: self.status.map(Into::into),
            assignee: self.assignee,
            task_order: self.task_order,
            feature: self.feature,
            feature_color: self.feature_color,
            client_timestamp: Some(client_timestamp),
        }
    }
}

/// Insertion slot offered in the create/edit dialog's priority picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PrioritySlot {
    /// Sort key value to submit when the slot is chosen.
    pub order: f64,
    /// Human-readable position description.
    pub label: String,
}

#[derive(Debug)]
struct BoardState {
    tasks: Vec<Task>,
    editing: Option<TaskId>,
    features: Vec<ProjectFeature>,
    connection: ConnectionState,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            editing: None,
            features: Vec::new(),
            connection: ConnectionState::Disconnected,
        }
    }
}

/// Reconciliation store for one project's task board.
///
/// Holds the authoritative local view of the task collection in arrival
/// order. Mutations are visible synchronously, before the corresponding
/// gateway request resolves; inbound events are applied in arrival order,
/// each independently timestamp-gated. State is never held locked across an
/// await.
pub struct BoardStore<G, C>
where
    G: TaskGateway + 'static,
    C: Clock + Send + Sync + 'static,
{
    project_id: String,
    gateway: Arc<G>,
    clock: Arc<C>,
    state: Mutex<BoardState>,
    notifications: broadcast::Sender<StoreNotification>,
    pending_reorders: Mutex<HashMap<TaskId, JoinHandle<()>>>,
    debounce_window: Duration,
}

impl<G, C> BoardStore<G, C>
where
    G: TaskGateway + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a store for the given project with the default debounce
    /// window.
    #[must_use]
    pub fn new(project_id: impl Into<String>, gateway: Arc<G>, clock: Arc<C>) -> Self {
        let (notifications, _) = broadcast::channel(64);
        Self {
            project_id: project_id.into(),
            gateway,
            clock,
            state: Mutex::new(BoardState::default()),
            notifications,
            pending_reorders: Mutex::new(HashMap::new()),
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
        }
    }

    /// Overrides the reorder-persistence debounce window.
    #[must_use]
    pub const fn with_debounce_window(mut self, window: Duration) -> Self {
        self.debounce_window = window;
        self
    }

    /// Subscribes to store failure notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreNotification> {
        self.notifications.subscribe()
    }

    /// Seeds the collection at board mount, before the channel connects.
    pub fn set_initial_tasks(&self, tasks: Vec<Task>) {
        self.state().tasks = tasks;
    }

    /// Returns the full collection in arrival order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.state().tasks.clone()
    }

    /// Returns one status partition, stably sorted by sort key.
    ///
    /// Ties keep arrival order.
    #[must_use]
    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<Task> {
        let mut partition: Vec<Task> = self
            .state()
            .tasks
            .iter()
            .filter(|task| task.status() == status)
            .cloned()
            .collect();
        partition.sort_by(|a, b| a.task_order().total_cmp(&b.task_order()));
        partition
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<Task> {
        self.state().tasks.iter().find(|task| task.id() == id).cloned()
    }

    /// Returns the next free sort key at the tail of a status partition:
    /// the maximum existing key plus one, or one for an empty partition.
    #[must_use]
    pub fn next_order_for_status(&self, status: TaskStatus) -> f64 {
        next_order(&self.state().tasks, status)
    }

    /// Returns the channel connection state last reported to the store.
    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        self.state().connection
    }

    /// Records the channel connection state.
    ///
    /// The store tolerates events and local operations in every state; an
    /// optimistic mutation outstanding across a disconnect simply remains
    /// the local view of truth until the channel corrects it.
    pub fn set_connection_state(&self, connection: ConnectionState) {
        self.state().connection = connection;
    }

    /// Opens an edit session for a task.
    ///
    /// While the session is open, inbound `updated` events for the same task
    /// are suppressed so the edit surface does not fight remote writes.
    pub fn begin_edit(&self, id: TaskId) {
        self.state().editing = Some(id);
    }

    /// Closes the edit session, if any.
    pub fn end_edit(&self) {
        self.state().editing = None;
    }

    /// Creates a task optimistically and persists it.
    ///
    /// The draft is validated before any network call. The task appears in
    /// local state immediately under a pending identifier; on confirmation
    /// the pending entry is replaced by the server record (a realtime
    /// `created` event may already have done so, in which case confirmation
    /// is a no-op). On failure the optimistic entry is removed, restoring
    /// pre-creation state exactly.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Domain`] when the title is blank, or
    /// [`StoreError::Gateway`] when persistence fails.
    pub async fn create_task(&self, draft: TaskDraft) -> StoreResult<TaskId> {
        draft.validate()?;
        let now = self.now_ms();
        let task_order = draft
            .task_order()
            .unwrap_or_else(|| self.next_order_for_status(draft.status()));

        let payload = CreateTaskPayload {
            project_id: self.project_id.clone(),
            title: draft.title().to_owned(),
            description: draft.description().map(ToOwned::to_owned),
            status: draft.status().into(),
            assignee: draft
                .assignee()
                .unwrap_or(DEFAULT_ASSIGNEE)
                .to_owned(),
            task_order,
            feature: draft.feature().map(ToOwned::to_owned),
            feature_color: draft.feature_color().map(ToOwned::to_owned),
        };

        let optimistic = Task::from_draft(draft, task_order, now);
        let pending_id = optimistic.id().clone();
        self.state().tasks.push(optimistic);
        tracing::debug!(task_id = %pending_id, "task added optimistically");

        match self.gateway.create_task(payload).await {
            Ok(record) => {
                let confirmed = record.into_task(now);
                let confirmed_id = confirmed.id().clone();
                let mut state = self.state();
                if let Some(slot) = state.tasks.iter_mut().find(|task| *task.id() == pending_id) {
                    *slot = confirmed;
                }
                Ok(confirmed_id)
            }
            Err(err) => {
                self.state().tasks.retain(|task| *task.id() != pending_id);
                tracing::debug!(task_id = %pending_id, "optimistic creation rolled back");
                Err(err.into())
            }
        }
    }

    /// Sends a partial field update for an existing task.
    ///
    /// No optimistic local mutation is applied; the authoritative change is
    /// expected back through the realtime channel. On failure local state is
    /// untouched and the error surfaces to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the identifier is absent from
    /// local state, or [`StoreError::Gateway`] when persistence fails.
    pub async fn update_task(&self, id: &TaskId, patch: TaskPatch) -> StoreResult<()> {
        if self.task(id).is_none() {
            return Err(StoreError::NotFound(id.clone()));
        }
        let payload = patch.into_payload(self.now_ms());
        Ok(self.gateway.update_task(id, payload).await?)
    }

    /// Moves a task to another status partition, optimistically.
    ///
    /// The task lands at the tail of the target partition (maximum key plus
    /// one). On gateway failure the entire pre-move collection is restored,
    /// a [`StoreNotification::MoveFailed`] is published, and the error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the identifier is absent, or
    /// [`StoreError::Gateway`] when persistence fails.
    pub async fn move_status(&self, id: &TaskId, status: TaskStatus) -> StoreResult<()> {
        let now = self.now_ms();
        let (snapshot, task_order) = {
            let mut state = self.state();
            let task_order = next_order(&state.tasks, status);
            let snapshot = state.tasks.clone();
            let task = state
                .tasks
                .iter_mut()
                .find(|task| task.id() == id)
                .ok_or_else(|| StoreError::NotFound(id.clone()))?;
            task.move_to(status, task_order, now);
            (snapshot, task_order)
        };

        let payload = UpdateTaskPayload {
            status: Some(status.into()),
            task_order: Some(task_order),
            client_timestamp: Some(now),
            ..UpdateTaskPayload::default()
        };

        match self.gateway.update_task(id, payload).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.state().tasks = snapshot;
                self.notify(StoreNotification::MoveFailed {
                    task_id: id.clone(),
                    message: err.to_string(),
                });
                Err(err.into())
            }
        }
    }

    /// Marks a task complete; shorthand for a move to
    /// [`TaskStatus::Complete`].
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Self::move_status`].
    pub async fn complete(&self, id: &TaskId) -> StoreResult<()> {
        self.move_status(id, TaskStatus::Complete).await
    }

    /// Moves a task to another feature group, optimistically.
    ///
    /// Same rollback shape as [`Self::move_status`], mutating only the
    /// feature label.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the identifier is absent, or
    /// [`StoreError::Gateway`] when persistence fails.
    pub async fn move_feature(&self, id: &TaskId, feature: impl Into<String>) -> StoreResult<()> {
        let new_feature = feature.into();
        let now = self.now_ms();
        let snapshot = {
            let mut state = self.state();
            let snapshot = state.tasks.clone();
            let task = state
                .tasks
                .iter_mut()
                .find(|task| task.id() == id)
                .ok_or_else(|| StoreError::NotFound(id.clone()))?;
            task.set_feature(new_feature.clone(), now);
            snapshot
        };

        let payload = UpdateTaskPayload {
            feature: Some(new_feature),
            client_timestamp: Some(now),
            ..UpdateTaskPayload::default()
        };

        match self.gateway.update_task(id, payload).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.state().tasks = snapshot;
                self.notify(StoreNotification::FeatureMoveFailed {
                    task_id: id.clone(),
                    message: err.to_string(),
                });
                Err(err.into())
            }
        }
    }

    /// Reorders a task within its status partition, optimistically and
    /// unconditionally.
    ///
    /// The new sort key is computed from the pre-move neighbour positions
    /// (direction-aware). Persistence is debounced per task: rapid
    /// successive reorders of the same task coalesce into one trailing-edge
    /// network write carrying only the final position. A failed persist is
    /// logged and never rolled back; the realtime channel corrects any
    /// divergence. A target index outside the partition, or equal to the
    /// current position, is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the identifier is absent from
    /// local state.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime: the debounced
    /// persistence write is spawned onto the caller's runtime.
    pub fn reorder(
        &self,
        id: &TaskId,
        target_index: usize,
        status: TaskStatus,
    ) -> StoreResult<()> {
        let now = self.now_ms();
        let new_order = {
            let mut state = self.state();
            if !state.tasks.iter().any(|task| task.id() == id) {
                return Err(StoreError::NotFound(id.clone()));
            }

            let mut partition: Vec<(TaskId, f64)> = state
                .tasks
                .iter()
                .filter(|task| task.status() == status)
                .map(|task| (task.id().clone(), task.task_order()))
                .collect();
            partition.sort_by(|a, b| a.1.total_cmp(&b.1));

            let Some(moving_index) = partition.iter().position(|(tid, _)| tid == id) else {
                tracing::debug!(task_id = %id, status = status.as_str(), "reorder target not in partition");
                return Ok(());
            };
            if target_index >= partition.len() {
                tracing::debug!(task_id = %id, target_index, "reorder index out of range");
                return Ok(());
            }
            if moving_index == target_index {
                return Ok(());
            }

            let orders: Vec<f64> = partition.iter().map(|(_, key)| *key).collect();
            let new_order = order::reorder_key(&orders, moving_index, target_index);
            if let Some(task) = state.tasks.iter_mut().find(|task| task.id() == id) {
                task.set_order(new_order, now);
            }
            new_order
        };

        self.schedule_reorder_flush(id.clone(), new_order);
        Ok(())
    }

    /// Deletes a task optimistically and persists the deletion.
    ///
    /// On failure the entire pre-delete collection is restored and the
    /// gateway's error re-raised; the caller decides the user-facing
    /// notification.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the identifier is absent, or
    /// [`StoreError::Gateway`] when persistence fails.
    pub async fn delete_task(&self, id: &TaskId) -> StoreResult<()> {
        let snapshot = {
            let mut state = self.state();
            if !state.tasks.iter().any(|task| task.id() == id) {
                return Err(StoreError::NotFound(id.clone()));
            }
            let snapshot = state.tasks.clone();
            state.tasks.retain(|task| task.id() != id);
            snapshot
        };

        match self.gateway.delete_task(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.state().tasks = snapshot;
                tracing::debug!(task_id = %id, "optimistic deletion rolled back");
                Err(err.into())
            }
        }
    }

    /// Merges one inbound realtime event into local state.
    ///
    /// Events are accepted in every connection state and applied in arrival
    /// order, each independently gated.
    pub fn apply_event(&self, event: TaskEvent) {
        match event {
            TaskEvent::Created {
                data,
                server_timestamp,
            } => self.apply_created(data, server_timestamp),
            TaskEvent::Updated {
                data,
                server_timestamp,
            } => self.apply_updated(data, server_timestamp),
            TaskEvent::Deleted { id } | TaskEvent::Archived { id } => {
                self.state().tasks.retain(|task| *task.id() != id);
            }
            TaskEvent::Reordered { tasks } | TaskEvent::InitialSnapshot { tasks } => {
                self.state().tasks = tasks
                    .into_iter()
                    .map(|record| record.into_task(0))
                    .collect();
            }
        }
    }

    /// Fetches and caches the project's feature listing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Gateway`] when the listing request fails; the
    /// previously cached listing is kept.
    pub async fn refresh_features(&self) -> StoreResult<Vec<ProjectFeature>> {
        let listing = self.gateway.project_features(&self.project_id).await?;
        self.state().features = listing.features.clone();
        Ok(listing.features)
    }

    /// Returns the cached feature listing.
    #[must_use]
    pub fn features(&self) -> Vec<ProjectFeature> {
        self.state().features.clone()
    }

    /// Returns the unique assignee names across all tasks, sorted, always
    /// including the default assignee.
    #[must_use]
    pub fn available_assignees(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = self
            .state()
            .tasks
            .iter()
            .map(|task| task.assignee().name().to_owned())
            .collect();
        names.insert(DEFAULT_ASSIGNEE.to_owned());
        names.into_iter().collect()
    }

    /// Lists the 1-based insertion slots of a status partition for the
    /// create/edit dialog's priority picker, excluding the task currently
    /// being edited if any.
    #[must_use]
    pub fn priority_slots(&self, status: TaskStatus, exclude: Option<&TaskId>) -> Vec<PrioritySlot> {
        let partition: Vec<Task> = self
            .tasks_by_status(status)
            .into_iter()
            .filter(|task| exclude.is_none_or(|id| task.id() != id))
            .collect();

        let mut slots = Vec::with_capacity(partition.len() + 1);
        let mut slot = 1.0;
        let Some(first) = partition.first() else {
            slots.push(PrioritySlot {
                order: slot,
                label: "1 - First task in this status".to_owned(),
            });
            return slots;
        };

        slots.push(PrioritySlot {
            order: slot,
            label: format!("1 - Before \"{}\"", clip(first.title(), 30)),
        });
        for pair in partition.windows(2) {
            let (Some(before), Some(after)) = (pair.first(), pair.last()) else {
                continue;
            };
            slot += 1.0;
            slots.push(PrioritySlot {
                order: slot,
                label: format!(
                    "{} - After \"{}\", Before \"{}\"",
                    slots.len() + 1,
                    clip(before.title(), 20),
                    clip(after.title(), 20)
                ),
            });
        }
        if let Some(last) = partition.last() {
            slot += 1.0;
            slots.push(PrioritySlot {
                order: slot,
                label: format!("{} - After \"{}\"", slots.len() + 1, clip(last.title(), 30)),
            });
        }
        slots
    }

    /// Persists a gapless `1, 2, 3, ..` key sequence for one status
    /// partition, one update per task in display order.
    ///
    /// Manual maintenance only; never triggered automatically, and local
    /// state is left for the realtime channel to refresh.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Gateway`] on the first failed update; earlier
    /// updates in the sequence remain persisted.
    pub async fn normalize_partition(&self, status: TaskStatus) -> StoreResult<()> {
        let partition = self.tasks_by_status(status);
        let orders = order::normalized_orders(partition.len());
        for (task, task_order) in partition.iter().zip(orders) {
            let payload = UpdateTaskPayload {
                task_order: Some(task_order),
                ..UpdateTaskPayload::default()
            };
            self.gateway.update_task(task.id(), payload).await?;
        }
        Ok(())
    }

    fn apply_created(&self, data: TaskRecord, server_timestamp: Option<i64>) {
        let incoming = data.into_task(server_timestamp.unwrap_or(0));
        let mut state = self.state();
        if state.tasks.iter().any(|task| task.id() == incoming.id()) {
            tracing::debug!(task_id = %incoming.id(), "created event for known task, skipping");
            return;
        }
        let confirmed_optimistic = state.tasks.iter_mut().find(|task| {
            task.id().is_pending()
                && task.title() == incoming.title()
                && task.status() == incoming.status()
        });
        if let Some(slot) = confirmed_optimistic {
            tracing::debug!(task_id = %incoming.id(), "created event confirms optimistic task");
            *slot = incoming;
            return;
        }
        state.tasks.push(incoming);
    }

    fn apply_updated(&self, data: TaskRecord, server_timestamp: Option<i64>) {
        let now = self.now_ms();
        let timestamp = server_timestamp.unwrap_or(now);
        let mut state = self.state();
        if state.editing.as_ref() == Some(&data.id) {
            tracing::debug!(task_id = %data.id, "suppressing update during edit session");
            return;
        }
        let Some(slot) = state.tasks.iter_mut().find(|task| *task.id() == data.id) else {
            return;
        };
        if timestamp <= slot.last_update() {
            tracing::debug!(task_id = %data.id, timestamp, "discarding stale update");
            return;
        }
        *slot = data.into_task(timestamp);
    }

    fn schedule_reorder_flush(&self, id: TaskId, task_order: f64) {
        let mut pending = self
            .pending_reorders
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.remove(&id) {
            handle.abort();
        }

        let gateway = Arc::clone(&self.gateway);
        let clock = Arc::clone(&self.clock);
        let window = self.debounce_window;
        let task_id = id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let payload = UpdateTaskPayload {
                task_order: Some(task_order),
                client_timestamp: Some(clock.utc().timestamp_millis()),
                ..UpdateTaskPayload::default()
            };
            if let Err(err) = gateway.update_task(&task_id, payload).await {
                tracing::warn!(
                    task_id = %task_id,
                    error = %err,
                    "failed to persist reorder; realtime resync will correct"
                );
            }
        });
        pending.insert(id, handle);
    }

    fn notify(&self, notification: StoreNotification) {
        if self.notifications.send(notification).is_err() {
            tracing::debug!("no notification subscribers");
        }
    }

    fn now_ms(&self) -> i64 {
        self.clock.utc().timestamp_millis()
    }

    fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Next free key at the tail of a status partition.
fn next_order(tasks: &[Task], status: TaskStatus) -> f64 {
    tasks
        .iter()
        .filter(|task| task.status() == status)
        .map(Task::task_order)
        .reduce(f64::max)
        .map_or(1.0, |max| max + 1.0)
}

/// Clips a title for slot labels, appending an ellipsis when truncated.
fn clip(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        return title.to_owned();
    }
    let mut clipped: String = title.chars().take(max_chars).collect();
    clipped.push_str("...");
    clipped
}
