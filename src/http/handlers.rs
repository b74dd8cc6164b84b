//! Request handlers translating HTTP input into store operations.
//!
//! Each route has a typed request struct; filters are explicitly
//! tri-state (present-true / present-false / absent) and checkbox fields
//! map presence to `true`.

use std::sync::Arc;

use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::{debug, error};

use crate::matrix::QuadrantCounts;
use crate::models::task::{parse_due_date, Task, TaskDraft};
use crate::persistence::task_repo::{ListFilter, TaskRepo};
use crate::persistence::SqlitePool;
use crate::{AppError, Result};

use super::views;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Task repository over the shared pool.
    pub repo: TaskRepo,
}

impl AppState {
    /// Build state around an already-connected pool.
    #[must_use]
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            repo: TaskRepo::new(pool),
        }
    }
}

/// Display mode for the listing page.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Flat list ordered by completion, deadline, id.
    #[default]
    List,
    /// Grouped by matrix quadrant.
    Matrix,
}

impl ViewMode {
    /// Query-string value for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Matrix => "matrix",
        }
    }
}

/// Typed query parameters for `GET /`.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct ListQuery {
    /// Tri-state urgency filter.
    pub urgent: Option<bool>,
    /// Tri-state importance filter.
    pub important: Option<bool>,
    /// Display mode, defaulting to the flat list.
    #[serde(default)]
    pub view_mode: ViewMode,
}

impl ListQuery {
    /// Store-level filter derived from the query.
    #[must_use]
    pub const fn filter(self) -> ListFilter {
        ListFilter {
            urgent: self.urgent,
            important: self.important,
        }
    }
}

/// Typed form body for `POST /add` and `POST /update/{id}`.
///
/// `is_urgent` / `is_important` are HTML checkboxes: any present value
/// means true, absence means false. The `urgent` / `important` /
/// `view_mode` fields carry the caller's listing context through the
/// submit so the redirect can preserve it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskForm {
    /// Task description; empty input causes the write to be skipped.
    #[serde(default)]
    pub content: String,
    /// Urgency checkbox; presence = true.
    pub is_urgent: Option<String>,
    /// Importance checkbox; presence = true.
    pub is_important: Option<String>,
    /// Optional `YYYY-MM-DD` deadline; malformed input is discarded.
    pub due_date: Option<String>,
    /// Carried listing context: urgency filter.
    pub urgent: Option<bool>,
    /// Carried listing context: importance filter.
    pub important: Option<bool>,
    /// Carried listing context: display mode.
    pub view_mode: Option<ViewMode>,
}

impl TaskForm {
    /// Validated draft from the submitted fields.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the content is empty after trim.
    pub fn draft(&self) -> Result<TaskDraft> {
        TaskDraft::new(
            &self.content,
            self.is_urgent.is_some(),
            self.is_important.is_some(),
            parse_due_date(self.due_date.as_deref()),
        )
    }

    /// Listing context the caller submitted from.
    #[must_use]
    pub fn return_context(&self) -> ListQuery {
        ListQuery {
            urgent: self.urgent,
            important: self.important,
            view_mode: self.view_mode.unwrap_or_default(),
        }
    }
}

/// Listing-page URI for the given filter/view context.
///
/// Omits parameters at their defaults so the bare listing stays `/`.
#[must_use]
pub fn listing_uri(query: ListQuery) -> String {
    let mut params: Vec<String> = Vec::new();
    if let Some(urgent) = query.urgent {
        params.push(format!("urgent={urgent}"));
    }
    if let Some(important) = query.important {
        params.push(format!("important={important}"));
    }
    if query.view_mode == ViewMode::Matrix {
        params.push("view_mode=matrix".to_owned());
    }
    if params.is_empty() {
        "/".to_owned()
    } else {
        format!("/?{}", params.join("&"))
    }
}

/// Handler-boundary error carrying the response policy.
///
/// Unknown ids become `404`; validation failures and persistence
/// failures redirect back to the listing page, the latter after
/// recording a diagnostic.
#[derive(Debug)]
pub struct HandlerError(AppError);

impl From<AppError> for HandlerError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::NotFound(msg) => {
                debug!(%msg, "request for unknown task");
                (StatusCode::NOT_FOUND, "task not found").into_response()
            }
            AppError::Validation(msg) => {
                debug!(%msg, "discarding invalid task input");
                Redirect::to("/").into_response()
            }
            err => {
                error!(%err, "store operation failed; change rolled back");
                Redirect::to("/").into_response()
            }
        }
    }
}

/// `GET /` — render the flat list or the grouped matrix.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> std::result::Result<Html<String>, HandlerError> {
    let tasks = state.repo.list(query.filter()).await?;
    let page = match query.view_mode {
        ViewMode::List => views::list_page(&tasks, query),
        ViewMode::Matrix => {
            let counts = QuadrantCounts::tally(tasks.iter().map(Task::quadrant));
            views::matrix_page(&tasks, counts, query)
        }
    };
    Ok(Html(page))
}

/// `POST /add` — create a task, silently skipping empty content.
pub async fn add_task(
    State(state): State<AppState>,
    Form(form): Form<TaskForm>,
) -> std::result::Result<Redirect, HandlerError> {
    let target = listing_uri(form.return_context());
    match form.draft() {
        Ok(draft) => {
            let task = state.repo.add(&draft).await?;
            debug!(task_id = task.id, quadrant = %task.quadrant(), "task added");
        }
        Err(err) => {
            debug!(%err, "skipping add with empty content");
        }
    }
    Ok(Redirect::to(&target))
}

/// `GET /delete/{id}` — remove a task; `404` when unknown.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> std::result::Result<Redirect, HandlerError> {
    state.repo.delete(id).await?;
    debug!(task_id = id, "task deleted");
    Ok(Redirect::to("/"))
}

/// `GET /complete/{id}` — toggle completion; `404` when unknown.
pub async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> std::result::Result<Redirect, HandlerError> {
    let task = state.repo.toggle_complete(id).await?;
    debug!(task_id = id, completed = task.completed, "task toggled");
    Ok(Redirect::to("/"))
}

/// `GET /edit/{id}` — pre-populated edit form; `404` when unknown.
pub async fn edit_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> std::result::Result<Html<String>, HandlerError> {
    let task = state.repo.get(id).await?;
    Ok(Html(views::edit_page(&task)))
}

/// `POST /update/{id}` — overwrite a task's mutable fields.
///
/// An unknown id is `404` even when the submitted content is empty;
/// empty content on an existing id skips the write and redirects.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<TaskForm>,
) -> std::result::Result<Redirect, HandlerError> {
    state.repo.get(id).await?;
    match form.draft() {
        Ok(draft) => {
            state.repo.update(id, &draft).await?;
            debug!(task_id = id, "task updated");
        }
        Err(err) => {
            debug!(task_id = id, %err, "skipping update with empty content");
        }
    }
    Ok(Redirect::to("/"))
}
