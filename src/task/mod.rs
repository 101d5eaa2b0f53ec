//! Task board reconciliation for Taskboard.
//!
//! This module owns the full lifecycle of a board's task collection:
//! optimistic local mutations (create, update, delete, status and feature
//! moves, drag reorders), realtime event merging with logical-timestamp
//! conflict resolution, and rollback on gateway failure. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The reconciliation store in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
