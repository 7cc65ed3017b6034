//! HTTP API for the task board.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/tasks` - List tasks ranked by business value
//! - `POST /api/tasks` - Create a new task
//! - `GET /api/tasks/{id}` - Get a single task
//! - `PUT /api/tasks/{id}` - Merge a partial update into a task
//! - `DELETE /api/tasks/{id}` - Remove a task

pub mod routes;
pub mod tasks;

pub use routes::{serve, AppState};
