//! Task module - records, validation, and the in-memory store.
//!
//! The store implements the three mutation intents (add, update, delete);
//! ranking and ROI derivation live in `crate::rank` and `crate::metrics`
//! and are pure functions over what the store hands them.

pub mod store;
pub mod task;

pub use store::{SharedTaskStore, TaskStore};
pub use task::{NewTask, Priority, Task, TaskError, TaskId, TaskPatch};
