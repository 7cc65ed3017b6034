//! # roiboard
//!
//! A small task board that ranks work by return-on-investment.
//!
//! This library provides:
//! - A pure ranking engine ordering tasks by ROI, then priority, then title
//! - A guarded ROI calculator that yields a defined "undefined" sentinel
//!   instead of faulting on bad input
//! - An in-memory task store implementing the add/update/delete intents
//! - An HTTP API for the surrounding presentation layer
//!
//! ## Data Flow
//!
//! ```text
//! caller mutation (add/update/delete)
//!         │
//!         ▼
//!    TaskStore ──► derive ROI per task ──► rank ──► ranked rows
//! ```
//!
//! Ranking and ROI derivation are stateless, synchronous transforms; the
//! store re-derives and re-ranks on every listing, so the sort key and the
//! displayed ROI always come from the same computation.
//!
//! ## Modules
//! - `metrics`: ROI derivation and display formatting
//! - `rank`: the tie-break chain comparator and `rank()`
//! - `task`: task records, validation, and the in-memory store
//! - `api`: axum HTTP surface

pub mod api;
pub mod config;
pub mod metrics;
pub mod rank;
pub mod task;

pub use config::Config;
