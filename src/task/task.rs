//! Core Task record and its validation rules.
//!
//! # Invariants
//! - `title` is non-empty after trimming
//! - `revenue` is finite and non-negative
//! - `time_taken` is finite; zero and negative values are tolerated as
//!   invalid input (they make ROI undefined) rather than rejected

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a task.
///
/// Assigned by the store on creation, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Create a new unique task ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TaskId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Business priority of a task.
///
/// A closed set with a strict total order `High > Medium > Low`. Unknown
/// labels are rejected at the serde boundary; the ranker never sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Fixed ordering weight, used only for comparison, never displayed.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// A unit of work tracked by the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store.
    pub id: TaskId,

    /// Non-empty display name, unique within the store.
    pub title: String,

    /// Expected monetary return.
    pub revenue: f64,

    /// Hours invested.
    pub time_taken: f64,

    /// Business priority.
    pub priority: Priority,

    /// Caller-defined lifecycle label; ranking does not interpret it.
    pub status: String,

    /// Free-text annotation. Always plain text; it must never be
    /// interpreted as markup by any rendering layer.
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Task payload without an id (the add intent).
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub revenue: f64,
    pub time_taken: f64,
    pub priority: Priority,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_status() -> String {
    "open".to_string()
}

/// Partial field set merged into an existing task (the update intent).
///
/// Unset fields leave the current value in place.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub revenue: Option<f64>,
    pub time_taken: Option<f64>,
    pub priority: Option<Priority>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl Task {
    /// Validate and construct a task from an add payload.
    ///
    /// # Errors
    /// - `EmptyTitle` if the title is empty or whitespace
    /// - `InvalidRevenue` if revenue is negative or not finite
    /// - `InvalidTimeTaken` if time taken is not finite
    pub fn new(payload: NewTask) -> Result<Self, TaskError> {
        let title = payload.title.trim().to_string();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        validate_revenue(payload.revenue)?;
        validate_time_taken(payload.time_taken)?;

        let now = Utc::now();
        Ok(Self {
            id: TaskId::new(),
            title,
            revenue: payload.revenue,
            time_taken: payload.time_taken,
            priority: payload.priority,
            status: payload.status,
            notes: payload.notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge a partial field set into this task.
    ///
    /// The same validation as `new` applies to each patched field. Callers
    /// that need all-or-nothing semantics patch a clone and swap.
    pub fn apply(&mut self, patch: TaskPatch) -> Result<(), TaskError> {
        if let Some(title) = patch.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(TaskError::EmptyTitle);
            }
            self.title = title;
        }
        if let Some(revenue) = patch.revenue {
            validate_revenue(revenue)?;
            self.revenue = revenue;
        }
        if let Some(time_taken) = patch.time_taken {
            validate_time_taken(time_taken)?;
            self.time_taken = time_taken;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_revenue(revenue: f64) -> Result<(), TaskError> {
    if !revenue.is_finite() || revenue < 0.0 {
        return Err(TaskError::InvalidRevenue(revenue));
    }
    Ok(())
}

fn validate_time_taken(time_taken: f64) -> Result<(), TaskError> {
    if !time_taken.is_finite() {
        return Err(TaskError::InvalidTimeTaken(time_taken));
    }
    Ok(())
}

/// Errors from task validation and store operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TaskError {
    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Revenue must be a finite, non-negative number (got {0})")]
    InvalidRevenue(f64),

    #[error("Time taken must be a finite number (got {0})")]
    InvalidTimeTaken(f64),

    #[error("A task titled {0:?} already exists")]
    DuplicateTitle(String),

    #[error("No task with id {0}")]
    UnknownTask(TaskId),
}
