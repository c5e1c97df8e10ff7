//! `PostgreSQL` repository implementation for task storage.

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
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the task adapter.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

const CREATE_TAREAS_SQL: &str =
    include_str!("../../../../migrations/postgres/2026-10-19-000000_create_tareas/up.sql");

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`StoreSetupError::Pool`] when no connection can be established
/// within the configured timeout.
pub fn connect(database_url: &str, settings: PoolSettings) -> Result<TaskPgPool, StoreSetupError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(settings.max_size())
        .connection_timeout(settings.connection_timeout())
        .build(manager)?;
    Ok(pool)
}

/// Creates the `tareas` table when it does not exist yet.
///
/// # Errors
///
/// Returns [`StoreSetupError`] when no connection is available or the DDL
/// fails.
pub fn migrate(pool: &TaskPgPool) -> Result<(), StoreSetupError> {
    let mut connection = pool.get()?;
    connection.batch_execute(CREATE_TAREAS_SQL)?;
    Ok(())
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow::from(task);
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(tareas::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(|err| map_write_error(err, &new_row.title))?;
            row_to_task(row)
        })
        .await
    }

    async fn list(&self, sort: TaskSort) -> TaskRepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = ordered_tasks!(Pg, sort)
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
            let row = diesel::update(tareas::table.find(id.value()))
                .set(&changes_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
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
