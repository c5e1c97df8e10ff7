//! `PostgreSQL` adapter for task persistence.

mod repository;

pub use repository::{PostgresTaskRepository, TaskPgPool, connect, migrate};
