//! Route table and shared handler state.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use mockable::Clock;
use tower_http::trace::TraceLayer;

use super::handlers::{
    check_title, create_task, delete_task, get_task, health_check, list_tasks, update_task,
};
use crate::task::{ports::TaskRepository, services::DynTaskService};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Task service backed by the configured store.
    pub tasks: DynTaskService,
}

impl AppState {
    /// Wires a task service over `repository` and `clock`.
    #[must_use]
    pub fn new(repository: Arc<dyn TaskRepository>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            tasks: DynTaskService::new(repository, clock),
        }
    }
}

/// Builds the application router with request tracing.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/tareas", get(list_tasks).post(create_task))
        .route("/api/tareas/verificar-titulo", post(check_title))
        .route(
            "/api/tareas/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
