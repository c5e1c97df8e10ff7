//! Task record and the value objects used to create and change it.

use super::TaskId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A persisted task record.
///
/// `id` and `created_at` are fixed when the store accepts the record; only
/// the title, description and due date change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    due_date: NaiveDate,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, `None` when stored empty.
    pub description: Option<String>,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy of this task with the mutable fields replaced.
    ///
    /// The identifier and creation timestamp are carried over unchanged.
    #[must_use]
    pub fn with_changes(&self, changes: &TaskChanges) -> Self {
        Self {
            id: self.id,
            title: changes.title.clone(),
            description: changes.description.clone(),
            due_date: changes.due_date,
            created_at: self.created_at,
        }
    }
}

/// A validated task awaiting its store-assigned identifier.
///
/// Values are produced by the task service after the validation chain has
/// accepted them; repositories persist them as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    due_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates a new task value.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        due_date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description,
            due_date,
            created_at,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Binds the store-assigned identifier, producing the persisted task.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            created_at: self.created_at,
        }
    }
}

/// Validated replacement values for the mutable fields of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    title: String,
    description: Option<String>,
    due_date: NaiveDate,
}

impl TaskChanges {
    /// Creates a change set.
    #[must_use]
    pub fn new(title: impl Into<String>, description: Option<String>, due_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description,
            due_date,
        }
    }

    /// Returns the replacement title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}
