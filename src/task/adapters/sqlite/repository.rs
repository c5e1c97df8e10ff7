//! `SQLite` repository implementation for task storage.

use super::super::sql::{
    NewTaskRow, PoolSettings, StoreSetupError, TaskChangesRow, TaskRow, map_query_error,
    map_write_error, ordered_tasks, row_to_task, run_blocking, tareas,
};
use crate::task::{
    domain::{NewTask, Task, TaskChanges, TaskId, TaskSort},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::{Sqlite, SqliteConnection};
use std::time::Duration;

/// `SQLite` connection pool type used by the task adapter.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

const CREATE_TAREAS_SQL: &str =
    include_str!("../../../../migrations/sqlite/2026-10-19-000000_create_tareas/up.sql");

const IN_MEMORY_DATABASE: &str = ":memory:";

/// Applies per-connection pragmas when the pool opens a connection.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas {
    busy_timeout: Duration,
    write_ahead_log: bool,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        let mut pragmas = format!("PRAGMA busy_timeout = {};", self.busy_timeout.as_millis());
        if self.write_ahead_log {
            pragmas.push_str(" PRAGMA journal_mode = WAL;");
        }
        connection
            .batch_execute(&pragmas)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a connection pool for the database file at `path`.
///
/// `:memory:` databases are private to one connection, so the pool is
/// pinned to a single connection that is never recycled.
///
/// # Errors
///
/// Returns [`StoreSetupError::Pool`] when the database cannot be opened.
pub fn connect(path: &str, settings: PoolSettings) -> Result<TaskSqlitePool, StoreSetupError> {
    let in_memory = path == IN_MEMORY_DATABASE;
    let pragmas = ConnectionPragmas {
        busy_timeout: settings.connection_timeout(),
        write_ahead_log: !in_memory,
    };
    let builder = Pool::builder()
        .connection_timeout(settings.connection_timeout())
        .connection_customizer(Box::new(pragmas));
    let sized = if in_memory {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder.max_size(settings.max_size())
    };
    let pool = sized.build(ConnectionManager::<SqliteConnection>::new(path))?;
    Ok(pool)
}

/// Creates the `tareas` table when it does not exist yet.
///
/// # Errors
///
/// Returns [`StoreSetupError`] when no connection is available or the DDL
/// fails.
pub fn migrate(pool: &TaskSqlitePool) -> Result<(), StoreSetupError> {
    let mut connection = pool.get()?;
    connection.batch_execute(CREATE_TAREAS_SQL)?;
    Ok(())
}

/// `SQLite`-backed task repository.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: TaskSqlitePool,
}

impl SqliteTaskRepository {
    /// Creates a new repository from a `SQLite` connection pool.
    #[must_use]
    pub const fn new(pool: TaskSqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow::from(task);
        run_blocking(&self.pool, move |connection| {
            let row = connection
                .immediate_transaction(|conn| {
                    diesel::insert_into(tareas::table)
                        .values(&new_row)
                        .execute(conn)?;
                    tareas::table
                        .filter(tareas::title.eq(new_row.title.as_str()))
                        .select(TaskRow::as_select())
                        .first::<TaskRow>(conn)
                })
                .map_err(|err| map_write_error(err, &new_row.title))?;
            row_to_task(row)
        })
        .await
    }

    async fn list(&self, sort: TaskSort) -> TaskRepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = ordered_tasks!(Sqlite, sort)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(map_query_error)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            let row = tareas::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(map_query_error)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn update(&self, id: TaskId, changes: &TaskChanges) -> TaskRepositoryResult<Task> {
        let changes_row = TaskChangesRow::from(changes);
        run_blocking(&self.pool, move |connection| {
            let row = connection
                .immediate_transaction(|conn| {
                    let affected = diesel::update(tareas::table.find(id.value()))
                        .set(&changes_row)
                        .execute(conn)?;
                    if affected == 0 {
                        return Ok(None);
                    }
                    tareas::table
                        .find(id.value())
                        .select(TaskRow::as_select())
                        .first::<TaskRow>(conn)
                        .map(Some)
                })
                .map_err(|err| map_write_error(err, &changes_row.title))?;
            row.map_or(Err(TaskRepositoryError::NotFound(id)), row_to_task)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        run_blocking(&self.pool, move |connection| {
            let deleted = diesel::delete(tareas::table.find(id.value()))
                .execute(connection)
                .map_err(map_query_error)?;
            Ok(deleted > 0)
        })
        .await
    }

    async fn title_exists(
        &self,
        title: &str,
        exclude: Option<TaskId>,
    ) -> TaskRepositoryResult<bool> {
        let lookup_title = title.to_owned();
        run_blocking(&self.pool, move |connection| {
            let matching = tareas::table.filter(tareas::title.eq(lookup_title));
            let found = match exclude {
                Some(excluded) => diesel::select(exists(
                    matching.filter(tareas::id.ne(excluded.value())),
                ))
                .get_result::<bool>(connection),
                None => diesel::select(exists(matching)).get_result::<bool>(connection),
            };
            found.map_err(map_query_error)
        })
        .await
    }
}
