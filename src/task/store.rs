//! In-memory task store.
//!
//! Owns the task collection and implements the three mutation intents the
//! ranking core consumes: add, update, delete. Ranking itself never writes;
//! `ranked()` re-derives ROI and re-ranks on every call, so no ordering can
//! go stale across a mutation.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::metrics::DerivedTask;
use crate::rank;
use crate::task::{NewTask, Task, TaskError, TaskId, TaskPatch};

/// In-memory store for tasks. No disk backing; the collection lives and
/// dies with the process.
#[derive(Default)]
pub struct TaskStore {
    tasks: RwLock<HashMap<TaskId, Task>>,
}

/// Shared task store type.
pub type SharedTaskStore = Arc<TaskStore>;

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new task from an add payload. The store assigns the id.
    ///
    /// # Errors
    /// Validation errors from `Task::new`, or `DuplicateTitle` when another
    /// task already uses the trimmed title.
    pub async fn add(&self, payload: NewTask) -> Result<Task, TaskError> {
        let task = Task::new(payload)?;
        let mut tasks = self.tasks.write().await;
        if tasks.values().any(|t| t.title == task.title) {
            return Err(TaskError::DuplicateTitle(task.title));
        }
        tracing::debug!(id = %task.id, title = %task.title, "Task created");
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    /// Merge a partial field set into the task identified by `id`.
    ///
    /// The patch is applied to a clone and swapped in, so a validation
    /// failure leaves the stored task untouched.
    ///
    /// # Errors
    /// `UnknownTask` if `id` is not in the store; `DuplicateTitle` if the
    /// patch renames the task onto another task's title; otherwise the
    /// validation errors of `Task::apply`.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.write().await;
        if let Some(new_title) = patch.title.as_deref().map(str::trim) {
            if tasks.values().any(|t| t.id != id && t.title == new_title) {
                return Err(TaskError::DuplicateTitle(new_title.to_string()));
            }
        }
        let current = tasks.get(&id).ok_or(TaskError::UnknownTask(id))?;
        let mut updated = current.clone();
        updated.apply(patch)?;
        tasks.insert(id, updated.clone());
        Ok(updated)
    }

    /// Remove the task identified by `id`.
    ///
    /// # Errors
    /// `UnknownTask` if `id` is not in the store.
    pub async fn delete(&self, id: TaskId) -> Result<(), TaskError> {
        let mut tasks = self.tasks.write().await;
        tasks
            .remove(&id)
            .map(|task| tracing::debug!(id = %task.id, title = %task.title, "Task deleted"))
            .ok_or(TaskError::UnknownTask(id))
    }

    /// Fetch a single task.
    pub async fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks.read().await.get(&id).cloned()
    }

    /// All tasks, in unspecified order.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.values().cloned().collect()
    }

    /// All tasks, ROI derived and ranked for display.
    pub async fn ranked(&self) -> Vec<DerivedTask> {
        let tasks = self.tasks.read().await;
        let derived: Vec<DerivedTask> = tasks
            .values()
            .cloned()
            .map(DerivedTask::derive)
            .collect();
        rank::rank(&derived)
    }
}
