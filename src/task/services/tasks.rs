//! Service layer for task creation, listing, update and deletion.
//!
//! Every write goes through the same validation chain: required fields,
//! lengths, title uniqueness, then due date. The first failure wins. The
//! uniqueness pre-check only improves error reporting; the store's constraint
//! decides duplicate races.

use crate::task::{
    domain::{NewTask, Task, TaskChanges, TaskId, TaskSort},
    ports::{TaskRepository, TaskRepositoryError},
    validation::{
        DESCRIPTION_MAX_CHARS, LengthLimit, ValidationError, parse_due_date,
        validate_description, validate_future_or_today_date, validate_integer, validate_length,
        validate_required, validate_title_length,
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: String,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    ///
    /// `due_date` is kept as received and parsed during validation.
    #[must_use]
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: due_date.into(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for replacing the mutable fields of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: i64,
    title: String,
    description: Option<String>,
    due_date: String,
}

impl UpdateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            due_date: due_date.into(),
        }
    }

    /// Sets the task description. Omitting it clears the stored one.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for the title uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCheckRequest {
    title: String,
    exclude_id: Option<i64>,
}

impl TitleCheckRequest {
    /// Creates a check for `title`.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            exclude_id: None,
        }
    }

    /// Ignores the task with `id`, as when a task keeps its own title.
    #[must_use]
    pub fn excluding(mut self, id: i64) -> Self {
        self.exclude_id = Some(id);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another task already holds the title.
    #[error("a task titled '{0}' already exists")]
    DuplicateTitle(String),

    /// An identifier is not a positive integer.
    #[error("invalid {field} '{value}', expected a positive integer")]
    InvalidId {
        /// Request field that carried the identifier.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// No task has the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The store could not be reached or failed.
    #[error("task storage unavailable: {0}")]
    StorageUnavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskServiceError {
    /// Returns `true` when the caller can fix the request and retry.
    #[must_use]
    pub const fn is_user_correctable(&self) -> bool {
        !matches!(self, Self::StorageUnavailable(_))
    }

    /// Stable machine-readable name of the failure.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.kind(),
            Self::DuplicateTitle(_) => "DuplicateTitle",
            Self::InvalidId { .. } => "InvalidId",
            Self::NotFound(_) => "NotFound",
            Self::StorageUnavailable(_) => "StorageUnavailable",
        }
    }

    /// Name of the offending input field, when there is one.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(err) => Some(err.field()),
            Self::DuplicateTitle(_) => Some("title"),
            Self::InvalidId { field, .. } => Some(*field),
            Self::NotFound(_) | Self::StorageUnavailable(_) => None,
        }
    }
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::DuplicateTitle(title) => Self::DuplicateTitle(title),
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            TaskRepositoryError::Persistence(source) => Self::StorageUnavailable(source),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task service over trait objects, as wired by the binary.
pub type DynTaskService = TaskService<dyn TaskRepository, dyn Clock + Send + Sync>;

/// Fields that passed the validation chain.
struct ValidatedFields {
    title: String,
    description: Option<String>,
    due_date: NaiveDate,
}

/// Borrowed view of the fields shared by create and update requests.
#[derive(Clone, Copy)]
struct RawFields<'a> {
    title: &'a str,
    description: Option<&'a str>,
    due_date: &'a str,
}

/// Task orchestration service.
pub struct TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] or
    /// [`TaskServiceError::DuplicateTitle`] for rejected input and
    /// [`TaskServiceError::StorageUnavailable`] when the store fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let raw = RawFields {
            title: &request.title,
            description: request.description.as_deref(),
            due_date: &request.due_date,
        };
        let fields = self.validate(raw, None).await?;
        let new_task = NewTask::new(
            fields.title,
            fields.description,
            fields.due_date,
            self.clock.utc(),
        );

        let task = self
            .repository
            .insert(&new_task)
            .await
            .map_err(|err| constraint_caught(err, new_task.title()))?;
        tracing::debug!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Lists every task in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::StorageUnavailable`] when the store fails.
    pub async fn list(&self, sort: TaskSort) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list(sort).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidId`] for non-positive identifiers
    /// and [`TaskServiceError::NotFound`] when no task matches.
    pub async fn get(&self, id: i64) -> TaskServiceResult<Task> {
        let task_id = parse_id(id, ID_FIELD)?;
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))
    }

    /// Replaces the title, description and due date of an existing task.
    ///
    /// The uniqueness check ignores the task itself, so keeping the current
    /// title is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidId`], then
    /// [`TaskServiceError::NotFound`], then any failure of the create
    /// validation chain.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let task_id = parse_id(request.id, ID_FIELD)?;
        if self.repository.find_by_id(task_id).await?.is_none() {
            return Err(TaskServiceError::NotFound(task_id));
        }

        let raw = RawFields {
            title: &request.title,
            description: request.description.as_deref(),
            due_date: &request.due_date,
        };
        let fields = self.validate(raw, Some(task_id)).await?;
        let changes = TaskChanges::new(fields.title, fields.description, fields.due_date);

        let task = self
            .repository
            .update(task_id, &changes)
            .await
            .map_err(|err| constraint_caught(err, changes.title()))?;
        tracing::debug!(task_id = %task.id(), "task updated");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// Returns `false` when no task matched; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidId`] for non-positive identifiers
    /// and [`TaskServiceError::StorageUnavailable`] when the store fails.
    pub async fn delete(&self, id: i64) -> TaskServiceResult<bool> {
        let task_id = parse_id(id, ID_FIELD)?;
        let deleted = self.repository.delete(task_id).await?;
        tracing::debug!(task_id = %task_id, deleted, "task delete requested");
        Ok(deleted)
    }

    /// Reports whether another task already uses the requested title.
    ///
    /// The answer is advisory: a concurrent write may change it before the
    /// caller acts. Blank titles are never duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidId`] for a non-positive exclusion
    /// and [`TaskServiceError::StorageUnavailable`] when the store fails.
    pub async fn check_title(&self, request: TitleCheckRequest) -> TaskServiceResult<bool> {
        let exclude = request
            .exclude_id
            .map(|id| parse_id(id, EXCLUDE_ID_FIELD))
            .transpose()?;
        let title = request.title.trim();
        if title.is_empty() {
            return Ok(false);
        }
        Ok(self.repository.title_exists(title, exclude).await?)
    }

    async fn validate(
        &self,
        raw: RawFields<'_>,
        exclude: Option<TaskId>,
    ) -> TaskServiceResult<ValidatedFields> {
        validate_required(&[("title", raw.title), ("due_date", raw.due_date)])?;

        let description = raw.description.unwrap_or_default();
        validate_title_length(raw.title)?;
        validate_length(&[LengthLimit::new(
            "description",
            description,
            DESCRIPTION_MAX_CHARS,
        )])?;
        validate_description(description)?;

        let title = raw.title.trim();
        if self.repository.title_exists(title, exclude).await? {
            return Err(TaskServiceError::DuplicateTitle(title.to_owned()));
        }

        let due_date = parse_due_date(raw.due_date)?;
        validate_future_or_today_date(due_date, self.today())?;

        let trimmed_description = description.trim();
        Ok(ValidatedFields {
            title: title.to_owned(),
            description: (!trimmed_description.is_empty()).then(|| trimmed_description.to_owned()),
            due_date,
        })
    }

    /// The current date in the server's local time zone.
    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}

/// Field name of identifiers taken from the request path.
const ID_FIELD: &str = "id";
/// Field name of the title check's exclusion.
const EXCLUDE_ID_FIELD: &str = "excludeId";

fn parse_id(id: i64, field: &'static str) -> TaskServiceResult<TaskId> {
    TaskId::new(id).map_err(|_| TaskServiceError::InvalidId {
        field,
        value: id.to_string(),
    })
}

/// Converts a repository failure raised by a write. A duplicate here means
/// the uniqueness pre-check passed but the store's constraint did not.
fn constraint_caught(err: TaskRepositoryError, title: &str) -> TaskServiceError {
    if matches!(err, TaskRepositoryError::DuplicateTitle(_)) {
        tracing::warn!(title, "store constraint rejected a title the pre-check accepted");
    }
    TaskServiceError::from(err)
}

/// Parses a textual identifier, as received in a request path.
///
/// # Errors
///
/// Returns [`TaskServiceError::InvalidId`] unless `raw` is a positive
/// integer.
pub fn parse_task_id(raw: &str) -> TaskServiceResult<i64> {
    validate_integer(raw, ID_FIELD).map_err(|_| TaskServiceError::InvalidId {
        field: ID_FIELD,
        value: raw.to_owned(),
    })
}
