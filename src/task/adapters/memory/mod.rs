//! In-memory adapters for board tests.

mod gateway;

pub use gateway::InMemoryTaskGateway;
