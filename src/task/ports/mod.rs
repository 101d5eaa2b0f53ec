//! Port contracts for task board reconciliation.
//!
//! Ports define infrastructure-agnostic interfaces used by the board store:
//! the persistence gateway's request/response contract and the realtime
//! channel's message contract. Transport and backend implementations live
//! outside this crate.

pub mod events;
pub mod gateway;
mod record;

pub use events::{ConnectionState, TaskEvent};
pub use gateway::{
    CreateTaskPayload, GatewayError, GatewayResult, ProjectFeature, ProjectFeatures, TaskGateway,
    UpdateTaskPayload,
};
pub use record::TaskRecord;
