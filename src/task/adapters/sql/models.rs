//! Diesel row models for task persistence.

use super::schema::tareas;
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskChanges, TaskId},
    ports::{TaskRepositoryError, TaskRepositoryResult},
};
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tareas)]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Due date.
    pub due_date: NaiveDate,
    /// Creation timestamp in UTC.
    pub created_at: NaiveDateTime,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tareas)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Due date.
    pub due_date: NaiveDate,
    /// Creation timestamp in UTC.
    pub created_at: NaiveDateTime,
}

/// Changeset for the mutable task columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tareas)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangesRow {
    /// Replacement title.
    pub title: String,
    /// Replacement description; `None` clears the column.
    pub description: Option<String>,
    /// Replacement due date.
    pub due_date: NaiveDate,
}

impl From<&NewTask> for NewTaskRow {
    fn from(task: &NewTask) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            due_date: task.due_date(),
            created_at: task.created_at().naive_utc(),
        }
    }
}

impl From<&TaskChanges> for TaskChangesRow {
    fn from(changes: &TaskChanges) -> Self {
        Self {
            title: changes.title().to_owned(),
            description: changes.description().map(str::to_owned),
            due_date: changes.due_date(),
        }
    }
}

/// Converts a stored row into the domain task.
pub fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        due_date,
        created_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id).map_err(TaskRepositoryError::persistence)?,
        title,
        description,
        due_date,
        created_at: created_at.and_utc(),
    };
    Ok(Task::from_persisted(data))
}
