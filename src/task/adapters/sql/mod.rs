//! Diesel schema, row models and helpers shared by the SQL adapters.
//!
//! Both `PostgreSQL` and `SQLite` store tasks in the same `tareas` table, so
//! the schema, row conversions, constraint detection and blocking-call
//! plumbing live here once.

mod models;
mod pool;
mod schema;

pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_POOL_SIZE, PoolSettings, StoreSetupError};

pub(super) use models::{NewTaskRow, TaskChangesRow, TaskRow, row_to_task};
pub(super) use schema::tareas;

use crate::task::ports::{TaskRepositoryError, TaskRepositoryResult};
use diesel::r2d2::{ConnectionManager, Pool, R2D2Connection};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Name of the UNIQUE constraint guarding task titles.
pub(super) const TITLE_UNIQUE_CONSTRAINT: &str = "tareas_title_unique";

/// Checks a connection out of `pool` and runs `f` on the blocking thread
/// pool. The connection returns to the pool as soon as `f` finishes.
pub(super) async fn run_blocking<C, F, T>(
    pool: &Pool<ConnectionManager<C>>,
    f: F,
) -> TaskRepositoryResult<T>
where
    C: R2D2Connection + Send + 'static,
    F: FnOnce(&mut C) -> TaskRepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(|err| {
            tracing::error!(error = %err, "task store connection unavailable");
            TaskRepositoryError::persistence(err)
        })?;
        f(&mut connection)
    })
    .await
    .map_err(TaskRepositoryError::persistence)?
}

/// Maps a failed write, turning title constraint violations into
/// [`TaskRepositoryError::DuplicateTitle`].
pub(super) fn map_write_error(err: DieselError, title: &str) -> TaskRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if is_title_unique_violation(info.as_ref()) =>
        {
            TaskRepositoryError::DuplicateTitle(title.to_owned())
        }
        _ => map_query_error(err),
    }
}

/// Wraps any other query failure as a persistence error.
pub(super) fn map_query_error(err: DieselError) -> TaskRepositoryError {
    tracing::error!(error = %err, "task store query failed");
    TaskRepositoryError::persistence(err)
}

/// `PostgreSQL` reports the constraint name; `SQLite` only names the column
/// in its message.
fn is_title_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == TITLE_UNIQUE_CONSTRAINT)
        || info.message().contains("tareas.title")
}

/// Builds the boxed `tareas` query ordered by a [`TaskSort`].
///
/// Expands to a concrete `tareas::BoxedQuery<'static, $backend>`; ties are
/// broken by identifier in the requested direction.
///
/// [`TaskSort`]: crate::task::domain::TaskSort
macro_rules! ordered_tasks {
    ($backend:ty, $sort:expr) => {{
        use crate::task::domain::{SortDirection, TaskSortField};
        use diesel::prelude::*;

        let sort = $sort;
        let query = tareas::table.into_boxed::<$backend>();
        match (sort.field(), sort.direction()) {
            (TaskSortField::Id, SortDirection::Ascending) => query.order(tareas::id.asc()),
            (TaskSortField::Id, SortDirection::Descending) => query.order(tareas::id.desc()),
            (TaskSortField::Title, SortDirection::Ascending) => {
                query.order((tareas::title.asc(), tareas::id.asc()))
            }
            (TaskSortField::Title, SortDirection::Descending) => {
                query.order((tareas::title.desc(), tareas::id.desc()))
            }
            (TaskSortField::DueDate, SortDirection::Ascending) => {
                query.order((tareas::due_date.asc(), tareas::id.asc()))
            }
            (TaskSortField::DueDate, SortDirection::Descending) => {
                query.order((tareas::due_date.desc(), tareas::id.desc()))
            }
            (TaskSortField::CreatedAt, SortDirection::Ascending) => {
                query.order((tareas::created_at.asc(), tareas::id.asc()))
            }
            (TaskSortField::CreatedAt, SortDirection::Descending) => {
                query.order((tareas::created_at.desc(), tareas::id.desc()))
            }
        }
    }};
}

pub(super) use ordered_tasks;
