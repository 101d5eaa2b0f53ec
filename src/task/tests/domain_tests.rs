//! Domain-focused tests for task identity and normalization behaviour.

use crate::task::domain::{
    StorageStatus, Task, TaskDomainError, TaskDraft, TaskId, TaskStatus, DEFAULT_ASSIGNEE,
    DEFAULT_FEATURE, DEFAULT_FEATURE_COLOR,
};
use crate::task::ports::TaskRecord;
use rstest::rstest;

#[rstest]
fn pending_identifiers_carry_the_reserved_prefix() {
    let id = TaskId::pending();
    assert!(id.is_pending());
    assert!(id.as_str().starts_with("temp-"));
}

#[rstest]
fn server_identifiers_are_not_pending() {
    let id = TaskId::from("abc123");
    assert!(!id.is_pending());
    assert_eq!(id.as_str(), "abc123");
}

#[rstest]
fn draft_validation_rejects_blank_title() {
    let draft = TaskDraft::new("   ", TaskStatus::Backlog);
    assert_eq!(draft.validate(), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn draft_builds_optimistic_task_with_defaults() {
    let draft = TaskDraft::new("Fix bug", TaskStatus::Backlog);
    let task = Task::from_draft(draft, 1.0, 42);

    assert!(task.id().is_pending());
    assert_eq!(task.title(), "Fix bug");
    assert_eq!(task.description(), "");
    assert_eq!(task.assignee().name(), DEFAULT_ASSIGNEE);
    assert_eq!(task.feature(), DEFAULT_FEATURE);
    assert_eq!(task.feature_color(), DEFAULT_FEATURE_COLOR);
    assert_eq!(task.task_order(), 1.0);
    assert_eq!(task.last_update(), 42);
}

#[rstest]
fn record_normalizes_absent_fields() {
    let record = TaskRecord {
        id: TaskId::from("abc123"),
        title: "Fix bug".to_owned(),
        description: None,
        status: StorageStatus::Doing,
        assignee: None,
        task_order: None,
        feature: Some("  ".to_owned()),
        feature_color: None,
    };

    let task = record.into_task(7);
    assert_eq!(task.status(), TaskStatus::InProgress);
    assert_eq!(task.description(), "");
    assert_eq!(task.assignee().name(), DEFAULT_ASSIGNEE);
    assert_eq!(task.feature(), DEFAULT_FEATURE);
    assert_eq!(task.task_order(), 0.0);
    assert_eq!(task.last_update(), 7);
}

#[rstest]
fn mutators_advance_the_logical_timestamp() {
    let draft = TaskDraft::new("Fix bug", TaskStatus::Backlog);
    let mut task = Task::from_draft(draft, 1.0, 10);

    task.move_to(TaskStatus::Review, 2.0, 20);
    assert_eq!(task.status(), TaskStatus::Review);
    assert_eq!(task.task_order(), 2.0);
    assert_eq!(task.last_update(), 20);

    task.set_feature("Auth", 30);
    assert_eq!(task.feature(), "Auth");
    assert_eq!(task.last_update(), 30);

    task.set_order(1.5, 40);
    assert_eq!(task.task_order(), 1.5);
    assert_eq!(task.last_update(), 40);
}
