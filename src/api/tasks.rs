//! Task management API endpoints.
//!
//! Provides endpoints for the task board:
//! - List tasks, ranked by business value
//! - Create task
//! - Get task details
//! - Update task (partial merge)
//! - Delete task

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::metrics::{self, DerivedTask};
use crate::task::{NewTask, Priority, Task, TaskError, TaskId, TaskPatch};

/// Create task routes.
pub fn routes() -> Router<Arc<super::routes::AppState>> {
    Router::new()
        .route("/", get(list_tasks))
        .route("/", post(create_task))
        .route("/:id", get(get_task))
        .route("/:id", put(update_task))
        .route("/:id", delete(delete_task))
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: TaskId,
    pub title: String,
    pub revenue: f64,
    pub time_taken: f64,
    pub priority: Priority,
    pub status: String,
    /// Plain text; clients must render it without markup interpretation.
    pub notes: Option<String>,
    /// Cached ROI used as the sort key; absent when undefined.
    pub roi: Option<f64>,
    /// Two-decimal ROI string, or "-" when undefined. Computed from the
    /// same cached value as `roi`, so the display can never disagree with
    /// the ordering.
    pub roi_display: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DerivedTask> for TaskResponse {
    fn from(d: DerivedTask) -> Self {
        let roi_display = metrics::format_roi(d.roi);
        Self {
            id: d.task.id,
            title: d.task.title,
            revenue: d.task.revenue,
            time_taken: d.task.time_taken,
            priority: d.task.priority,
            status: d.task.status,
            notes: d.task.notes,
            roi: d.roi,
            roi_display,
            created_at: d.task.created_at,
            updated_at: d.task.updated_at,
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        DerivedTask::derive(task).into()
    }
}

/// Map store errors onto HTTP status codes.
fn error_response(err: TaskError) -> (StatusCode, String) {
    let status = match err {
        TaskError::UnknownTask(_) => StatusCode::NOT_FOUND,
        TaskError::DuplicateTitle(_) => StatusCode::CONFLICT,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, err.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/tasks - List all tasks ranked by business value.
async fn list_tasks(
    State(state): State<Arc<super::routes::AppState>>,
) -> Json<Vec<TaskResponse>> {
    let ranked = state.tasks.ranked().await;
    Json(ranked.into_iter().map(Into::into).collect())
}

/// POST /api/tasks - Create a new task.
async fn create_task(
    State(state): State<Arc<super::routes::AppState>>,
    Json(payload): Json<NewTask>,
) -> Result<(StatusCode, Json<TaskResponse>), (StatusCode, String)> {
    let task = state.tasks.add(payload).await.map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// GET /api/tasks/:id - Get a single task.
async fn get_task(
    State(state): State<Arc<super::routes::AppState>>,
    AxumPath(id): AxumPath<Uuid>,
) -> Result<Json<TaskResponse>, (StatusCode, String)> {
    let id = TaskId::from(id);
    match state.tasks.get(id).await {
        Some(task) => Ok(Json(task.into())),
        None => Err(error_response(TaskError::UnknownTask(id))),
    }
}

/// PUT /api/tasks/:id - Merge a partial field set into a task.
async fn update_task(
    State(state): State<Arc<super::routes::AppState>>,
    AxumPath(id): AxumPath<Uuid>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<TaskResponse>, (StatusCode, String)> {
    let task = state
        .tasks
        .update(TaskId::from(id), patch)
        .await
        .map_err(error_response)?;
    Ok(Json(task.into()))
}

/// DELETE /api/tasks/:id - Remove a task.
async fn delete_task(
    State(state): State<Arc<super::routes::AppState>>,
    AxumPath(id): AxumPath<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .tasks
        .delete(TaskId::from(id))
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, revenue: f64, time_taken: f64) -> Task {
        Task::new(NewTask {
            title: title.to_string(),
            revenue,
            time_taken,
            priority: Priority::Medium,
            status: "open".to_string(),
            notes: None,
        })
        .unwrap()
    }

    #[test]
    fn response_display_matches_cached_roi() {
        let response = TaskResponse::from(task("Billing", 100.0, 4.0));
        assert_eq!(response.roi, Some(25.0));
        assert_eq!(response.roi_display, "25.00");
    }

    #[test]
    fn response_renders_undefined_roi_as_dash() {
        let response = TaskResponse::from(task("Unstarted", 100.0, 0.0));
        assert_eq!(response.roi, None);
        assert_eq!(response.roi_display, "-");
    }

    #[test]
    fn notes_serialize_as_plain_text() {
        let mut t = task("Notes", 10.0, 1.0);
        t.notes = Some("<b>bold</b> & <script>alert(1)</script>".to_string());
        let json = serde_json::to_value(TaskResponse::from(t)).unwrap();
        // The markup survives only as an inert JSON string.
        assert_eq!(
            json["notes"],
            serde_json::json!("<b>bold</b> & <script>alert(1)</script>")
        );
    }

    #[test]
    fn unknown_task_maps_to_not_found() {
        let (status, _) = error_response(TaskError::UnknownTask(TaskId::new()));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_title_maps_to_conflict() {
        let (status, _) = error_response(TaskError::DuplicateTitle("X".to_string()));
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn validation_errors_map_to_bad_request() {
        let (status, _) = error_response(TaskError::EmptyTitle);
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
