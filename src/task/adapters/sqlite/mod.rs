//! `SQLite` adapter for task persistence.
//!
//! Used for local runs when no server database is configured. Writes run in
//! `IMMEDIATE` transactions so concurrent writers queue on the database lock
//! (bounded by `busy_timeout`) instead of failing on lock upgrades.

mod repository;

pub use repository::{SqliteTaskRepository, TaskSqlitePool, connect, migrate};
