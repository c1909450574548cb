//! Todo item endpoints
//!
//! Each operation is one storage gateway call plus status translation.
//! No retries, no validation beyond the update identity check.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{NewTodoItem, TodoItem};

/// Incoming todo item payload.
///
/// Create and update both accept the full entity shape; a field absent
/// from the body binds to its default, so an update without an `id`
/// mismatches any real path id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

/// GET /api/todo - list all todo items
async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoItem>>, ApiError> {
    let items = state.store().list_all().await?;
    Ok(Json(items))
}

/// GET /api/todo/{id} - get a single item
async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItem>, ApiError> {
    let item = state
        .store()
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound { id })?;

    Ok(Json(item))
}

/// POST /api/todo - create an item; the store assigns the id
///
/// Any id in the body is ignored. The Location header points at the
/// get-by-id route for the new record.
async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<TodoItemRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<TodoItem>), ApiError> {
    let item = state
        .store()
        .insert(NewTodoItem {
            name: req.name,
            is_complete: req.is_complete,
        })
        .await?;
    state.store().persist().await?;

    let location = format!("/api/todo/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

/// PUT /api/todo/{id} - full-record replacement
async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TodoItemRequest>,
) -> Result<StatusCode, ApiError> {
    if req.id != id {
        return Err(ApiError::IdMismatch {
            path_id: id,
            body_id: req.id,
        });
    }

    state
        .store()
        .replace(
            id,
            TodoItem {
                id,
                name: req.name,
                is_complete: req.is_complete,
            },
        )
        .await?;
    state.store().persist().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/todo/{id} - delete an item
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.store().find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound { id });
    }

    state.store().remove(id).await?;
    state.store().persist().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Todo routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/todo", get(list_todos).post(create_todo))
        .route(
            "/api/todo/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}
