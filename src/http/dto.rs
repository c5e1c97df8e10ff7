//! Request and response bodies.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::task::domain::Task;

/// Body of create and update requests.
///
/// Required fields are optional here: absent and `null` values reach
/// validation as empty strings, so the error can name the field instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPayload {
    /// Task title.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional description; absent, `null` and blank are equivalent.
    #[serde(default)]
    pub description: Option<String>,
    /// Due date as `YYYY-MM-DD`.
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Body of the title uniqueness check.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleCheckPayload {
    /// Title to look for; `null` is treated as blank.
    #[serde(default)]
    pub title: Option<String>,
    /// Task to ignore, usually the one being edited.
    #[serde(default)]
    pub exclude_id: Option<i64>,
}

/// Query string of the listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Sort field: `id`, `title`, `due_date` or `created_at`.
    pub sort: Option<String>,
    /// Sort direction: `asc` or `desc`.
    pub order: Option<String>,
}

/// Task as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Description, `null` when none was given.
    pub description: Option<String>,
    /// Due date as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
    /// Creation timestamp (RFC 3339, UTC).
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            due_date: task.due_date(),
            created_at: task.created_at(),
        }
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTaskResponse {
    /// Whether a task was removed.
    pub deleted: bool,
}

/// Result of the title uniqueness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleCheckResponse {
    /// Whether another task already uses the title.
    pub is_duplicate: bool,
}

/// Liveness check body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: &'static str,
}
