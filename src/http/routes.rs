//! REST routes for todo management.

use super::ApiError;
use crate::todo::{
    domain::{Todo, TodoId},
    ports::TodoRepository,
    services::TodoService,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Builds the application router over the given todo service.
///
/// Routes:
///
/// - `GET /health`: liveness probe
/// - `GET /api/todos`: list all records
/// - `POST /api/todos`: create a record
/// - `GET /api/todos/:id`: fetch one record
/// - `PUT /api/todos/:id`: replace a record's title and description
/// - `DELETE /api/todos/:id`: delete a record
#[must_use]
pub fn build_router<R>(service: TodoService<R>) -> Router
where
    R: TodoRepository + Clone + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/todos", get(list_todos::<R>).post(create_todo::<R>))
        .route(
            "/api/todos/:id",
            get(get_todo::<R>)
                .put(update_todo::<R>)
                .delete(delete_todo::<R>),
        )
        .with_state(service)
}

#[expect(clippy::unused_async, reason = "axum handlers must be async")]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn list_todos<R>(State(service): State<TodoService<R>>) -> Result<Json<Vec<Todo>>, ApiError>
where
    R: TodoRepository + Clone + 'static,
{
    Ok(Json(service.list_todos().await?))
}

async fn get_todo<R>(
    State(service): State<TodoService<R>>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiError>
where
    R: TodoRepository + Clone + 'static,
{
    Ok(Json(service.todo_by_id(id).await?))
}

async fn create_todo<R>(
    State(service): State<TodoService<R>>,
    Json(todo): Json<Todo>,
) -> Result<Json<Todo>, ApiError>
where
    R: TodoRepository + Clone + 'static,
{
    Ok(Json(service.create_todo(todo).await?))
}

async fn update_todo<R>(
    State(service): State<TodoService<R>>,
    Path(id): Path<TodoId>,
    Json(details): Json<Todo>,
) -> Result<Json<Todo>, ApiError>
where
    R: TodoRepository + Clone + 'static,
{
    Ok(Json(service.update_todo(id, details).await?))
}

async fn delete_todo<R>(
    State(service): State<TodoService<R>>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiError>
where
    R: TodoRepository + Clone + 'static,
{
    service.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
