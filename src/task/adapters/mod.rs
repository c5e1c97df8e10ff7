//! Adapter implementations for task ports.
//!
//! Three stores implement [`crate::task::ports::TaskRepository`]: an
//! in-memory map, `SQLite` and `PostgreSQL`. [`factory`] picks one from
//! configuration.

pub mod factory;
pub mod memory;
pub mod postgres;
mod sql;
pub mod sqlite;

pub use sql::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_POOL_SIZE, PoolSettings, StoreSetupError};
