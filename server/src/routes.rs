//! Router and request handlers.
//!
//! # Routes
//!
//! | Method | Path | Behavior |
//! |--------|------|----------|
//! | GET | `/` | render the list view |
//! | GET | `/todo/{id}` | render the detail view, 404 if absent |
//! | POST | `/add-todo` | insert, redirect to `/` |
//! | POST | `/update-todo/{id}` | rename, redirect to the referrer |
//! | GET | `/remove-todo/{id}` | delete, redirect to `/` |
//! | GET | `/toggle-todo/{id}` | flip `done`, redirect to the referrer |
//! | GET | `/change-priority/{id}` | rotate priority, redirect to the referrer |
//!
//! Unmatched paths fall through to the static file service and then to
//! the fixed 404 page. Mutating routes look the row up first, so a
//! missing id is an explicit 404 rather than a blind write.

use axum::extract::{Path, State};
use axum::handler::HandlerWithoutStateExt;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use todo_core::{NewTodo, TodoPatch, UpdateTitle};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::error::AppError;
use crate::store::{StoreError, TodoStore};
use crate::views;

/// Build the application router around a connected store.
pub fn app(store: TodoStore, public_dir: impl AsRef<std::path::Path>) -> Router {
    let static_files = ServeDir::new(public_dir).not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(index))
        .route("/todo/{id}", get(show_todo))
        .route("/add-todo", post(add_todo))
        .route("/update-todo/{id}", post(update_todo))
        .route("/remove-todo/{id}", get(remove_todo))
        .route("/toggle-todo/{id}", get(toggle_todo))
        .route("/change-priority/{id}", get(change_priority))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

async fn index(State(store): State<TodoStore>) -> Result<Html<String>, AppError> {
    let todos = store.list().await?;
    Ok(views::index(&todos)?)
}

async fn show_todo(
    State(store): State<TodoStore>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let todo = store.find(id).await?.ok_or(AppError::NotFound)?;
    Ok(views::detail(&todo)?)
}

async fn add_todo(
    State(store): State<TodoStore>,
    Form(input): Form<NewTodo>,
) -> Result<Redirect, AppError> {
    store.insert(input).await?;
    Ok(Redirect::to("/"))
}

async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Form(input): Form<UpdateTitle>,
) -> Result<Redirect, AppError> {
    store.find(id).await?.ok_or(AppError::NotFound)?;
    store
        .update(
            id,
            TodoPatch {
                title: Some(input.title),
                ..TodoPatch::default()
            },
        )
        .await?;
    Ok(redirect_back(&headers))
}

async fn remove_todo(
    State(store): State<TodoStore>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    store.find(id).await?.ok_or(AppError::NotFound)?;
    store.delete(id).await?;
    Ok(Redirect::to("/"))
}

async fn toggle_todo(
    State(store): State<TodoStore>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Redirect, AppError> {
    let todo = store.find(id).await?.ok_or(AppError::NotFound)?;
    store
        .update(
            id,
            TodoPatch {
                done: Some(!todo.done),
                ..TodoPatch::default()
            },
        )
        .await?;
    Ok(redirect_back(&headers))
}

/// Unlike the other routes, internal failures here answer with a JSON
/// error body instead of the HTML error page.
async fn change_priority(
    State(store): State<TodoStore>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Response {
    match rotate(&store, id).await {
        Ok(true) => redirect_back(&headers).into_response(),
        Ok(false) => AppError::NotFound.into_response(),
        Err(err) => {
            tracing::error!(%id, error = %err, "failed to rotate todo priority");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "failed to change todo priority" })),
            )
                .into_response()
        }
    }
}

/// Read the current priority and write its successor. `false` means the
/// row does not exist.
async fn rotate(store: &TodoStore, id: Uuid) -> Result<bool, StoreError> {
    let Some(current) = store.priority(id).await? else {
        return Ok(false);
    };
    store
        .update(
            id,
            TodoPatch {
                priority: Some(current.next()),
                ..TodoPatch::default()
            },
        )
        .await?;
    Ok(true)
}

/// Redirect to the page that issued the request, falling back to the
/// list when the client sent no usable `Referer` header.
fn redirect_back(headers: &HeaderMap) -> Redirect {
    match headers.get(header::REFERER).and_then(|value| value.to_str().ok()) {
        Some(back) => Redirect::to(back),
        None => Redirect::to("/"),
    }
}

/// Fixed page for anything no route or static file matched.
async fn not_found() -> (StatusCode, Html<&'static str>) {
    tracing::debug!("unmatched path");
    (StatusCode::NOT_FOUND, Html(views::NOT_FOUND_PAGE))
}
