//! HTTP endpoint handlers
//!
//! Each handler takes the repository lock for one statement, releases it,
//! then renders.

use std::sync::{Arc, MutexGuard};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;

use todo_core::{NewTodo, Repository, TodoError, TodoId};

use crate::{render, AppState};

type HandlerError = (StatusCode, String);

fn repository(state: &AppState) -> Result<MutexGuard<'_, Repository>, HandlerError> {
    state.repository.lock().map_err(|e| {
        tracing::error!("Repository mutex poisoned: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, String::new())
    })
}

fn error_response(err: TodoError) -> HandlerError {
    match err {
        TodoError::Validation(message) => (StatusCode::BAD_REQUEST, message),
        TodoError::NotFound(_) => (StatusCode::NOT_FOUND, String::new()),
        TodoError::Persistence(e) => {
            tracing::error!("Storage failure: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, String::new())
        }
    }
}

/// Page shell
pub async fn index() -> Html<String> {
    Html(render::page())
}

/// List all todos followed by the creation form
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, HandlerError> {
    let todos = repository(&state)?.list_todos().map_err(error_response)?;
    Ok(Html(render::todo_list(&todos)))
}

/// Form body for creating a todo
#[derive(Debug, Deserialize)]
pub struct CreateTodoForm {
    pub content: String,
}

/// Create a todo and return its item fragment
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateTodoForm>,
) -> Result<Html<String>, HandlerError> {
    let new_todo = NewTodo::new(form.content).map_err(error_response)?;

    let todo = repository(&state)?
        .create_todo(&new_todo)
        .map_err(error_response)?;

    tracing::debug!(id = %todo.id, "Created todo");
    Ok(Html(render::todo_item(&todo)))
}

/// Flip a todo's completed flag and return the updated fragment
pub async fn toggle_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, HandlerError> {
    let id = TodoId(id);

    let todo = repository(&state)?
        .toggle_todo(id)
        .map_err(error_response)?
        .ok_or_else(|| error_response(TodoError::NotFound(format!("todo {}", id))))?;

    tracing::debug!(%id, completed = todo.completed, "Toggled todo");
    Ok(Html(render::todo_item(&todo)))
}

/// Delete a todo
///
/// Responds 200 with an empty body whether or not the row existed; htmx
/// only swaps on 200, and the empty swap removes the item.
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, HandlerError> {
    let id = TodoId(id);

    let removed = repository(&state)?
        .delete_todo(id)
        .map_err(error_response)?;

    tracing::debug!(%id, removed, "Deleted todo");
    Ok(Html(String::new()))
}
