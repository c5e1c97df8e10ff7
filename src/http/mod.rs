//! JSON HTTP interface for task management.
//!
//! Handlers stay thin: they decode the request, call the task service and
//! encode the result. Every failure leaves as an [`ApiErrorResponse`] with a
//! `{kind, field?, message}` body.

mod dto;
mod error;
mod handlers;
mod router;

pub use dto::{
    DeleteTaskResponse, HealthResponse, ListTasksQuery, TaskPayload, TaskResponse,
    TitleCheckPayload, TitleCheckResponse,
};
pub use error::{ApiError, ApiErrorResponse};
pub use handlers::{
    check_title, create_task, delete_task, get_task, health_check, list_tasks, update_task,
};
pub use router::{AppState, router};
