//! Error types for task domain construction and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not a positive integer.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(i64),
}

/// Error returned while parsing listing order parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseSortError {
    /// The sort field is not one of the sortable task columns.
    #[error("unknown sort field '{0}', expected id, title, due_date or created_at")]
    UnknownField(String),

    /// The sort direction is neither ascending nor descending.
    #[error("unknown sort direction '{0}', expected asc or desc")]
    UnknownDirection(String),
}
