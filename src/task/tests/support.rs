//! Shared fixtures for board store tests.

use std::sync::Arc;

use crate::task::adapters::memory::InMemoryTaskGateway;
use crate::task::domain::{StorageStatus, TaskId};
use crate::task::ports::TaskRecord;
use crate::task::services::BoardStore;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::{Clock, DefaultClock};
use rstest::fixture;

pub(super) type TestStore = BoardStore<InMemoryTaskGateway, DefaultClock>;

/// Store under test plus a handle on its gateway's recorded traffic.
pub(super) struct Harness {
    pub store: TestStore,
    pub gateway: InMemoryTaskGateway,
}

#[fixture]
pub(super) fn harness() -> Harness {
    let gateway = InMemoryTaskGateway::new();
    let store = BoardStore::new(
        "project-1",
        Arc::new(gateway.clone()),
        Arc::new(DefaultClock),
    );
    Harness { store, gateway }
}

/// Clock pinned to a fixed instant for deterministic timestamps.
pub(super) struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub(super) fn at_ms(ms: i64) -> Self {
        Self(
            Utc.timestamp_millis_opt(ms)
                .single()
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a minimal wire record for seeding and event payloads.
pub(super) fn record(id: &str, title: &str, status: StorageStatus, task_order: f64) -> TaskRecord {
    TaskRecord {
        id: TaskId::from(id),
        title: title.to_owned(),
        description: None,
        status,
        assignee: None,
        task_order: Some(task_order),
        feature: None,
        feature_color: None,
    }
}
