//! Application services for task board reconciliation.

mod store;

pub use store::{
    BoardStore, PrioritySlot, StoreError, StoreNotification, StoreResult, TaskPatch,
    DEFAULT_DEBOUNCE_WINDOW,
};
