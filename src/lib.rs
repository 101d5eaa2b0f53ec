//! Taskboard: client-side state engine for a realtime kanban/table board.
//!
//! This crate reconciles local optimistic edits, server-pushed realtime
//! events, and user-driven reordering into one consistent in-memory task
//! collection, tolerating network failure and out-of-order delivery.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (gateway fakes, etc.)
//!
//! Rendering, drag-and-drop gestures, dialog/toast presentation, the
//! realtime transport, and the backend persistence service are external
//! collaborators reached only through the port contracts in
//! [`task::ports`].

pub mod task;
