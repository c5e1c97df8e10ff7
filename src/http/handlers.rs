//! HTTP handlers for task endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};

use super::{
    dto::{
        DeleteTaskResponse, HealthResponse, ListTasksQuery, TaskPayload, TaskResponse,
        TitleCheckPayload, TitleCheckResponse,
    },
    error::ApiErrorResponse,
    router::AppState,
};
use crate::task::{
    domain::TaskSort,
    services::{CreateTaskRequest, TitleCheckRequest, UpdateTaskRequest, parse_task_id},
};

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// `GET /health`
#[expect(clippy::unused_async, reason = "axum handlers are async")]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /api/tareas`
///
/// # Errors
///
/// Returns 400 for unknown `sort` or `order` values and 503 when the store
/// fails.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let sort = TaskSort::parse(query.sort.as_deref(), query.order.as_deref())?;
    let tasks = state.tasks.list(sort).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// `POST /api/tareas`
///
/// # Errors
///
/// Returns 400 for malformed or invalid input and duplicate titles, and 503
/// when the store fails.
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let Json(body) = payload?;
    let mut request = CreateTaskRequest::new(
        body.title.unwrap_or_default(),
        body.due_date.unwrap_or_default(),
    );
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    let task = state.tasks.create(request).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// `GET /api/tareas/{id}`
///
/// # Errors
///
/// Returns 400 for invalid identifiers and 404 for unknown tasks.
pub async fn get_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let id = parse_task_id(&raw_id)?;
    let task = state.tasks.get(id).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `PUT /api/tareas/{id}`
///
/// # Errors
///
/// Returns 400 for invalid identifiers or input, 404 for unknown tasks and
/// 503 when the store fails.
pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>> {
    let id = parse_task_id(&raw_id)?;
    let Json(body) = payload?;
    let mut request = UpdateTaskRequest::new(
        id,
        body.title.unwrap_or_default(),
        body.due_date.unwrap_or_default(),
    );
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    let task = state.tasks.update(request).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `DELETE /api/tareas/{id}`
///
/// Deleting a missing task answers `{"deleted": false}`.
///
/// # Errors
///
/// Returns 400 for invalid identifiers and 503 when the store fails.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    let id = parse_task_id(&raw_id)?;
    let deleted = state.tasks.delete(id).await?;
    Ok(Json(DeleteTaskResponse { deleted }))
}

/// `POST /api/tareas/verificar-titulo`
///
/// # Errors
///
/// Returns 400 for malformed bodies or a non-positive `excludeId`, and 503
/// when the store fails.
pub async fn check_title(
    State(state): State<AppState>,
    payload: Result<Json<TitleCheckPayload>, JsonRejection>,
) -> ApiResult<Json<TitleCheckResponse>> {
    let Json(body) = payload?;
    let mut request = TitleCheckRequest::new(body.title.unwrap_or_default());
    if let Some(exclude_id) = body.exclude_id {
        request = request.excluding(exclude_id);
    }
    let is_duplicate = state.tasks.check_title(request).await?;
    Ok(Json(TitleCheckResponse { is_duplicate }))
}
