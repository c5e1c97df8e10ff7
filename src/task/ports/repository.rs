//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTask, Task, TaskChanges, TaskId, TaskSort};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations are the sole writers of the task table. Every mutating
/// operation touches exactly one row and is atomic at that level.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTitle`] when the store's
    /// uniqueness constraint rejects the title.
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Returns every task in the requested order.
    async fn list(&self, sort: TaskSort) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Replaces the mutable fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task matches and
    /// [`TaskRepositoryError::DuplicateTitle`] when another task already
    /// holds the new title.
    async fn update(&self, id: TaskId, changes: &TaskChanges) -> TaskRepositoryResult<Task>;

    /// Deletes a task.
    ///
    /// Returns `false` when no task matched, which is not an error.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Reports whether a task other than `exclude` already uses `title`.
    ///
    /// The comparison is exact and case-sensitive.
    async fn title_exists(&self, title: &str, exclude: Option<TaskId>)
    -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Another task already holds the title.
    #[error("duplicate task title: {0}")]
    DuplicateTitle(String),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
