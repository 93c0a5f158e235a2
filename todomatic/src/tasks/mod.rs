//! In-memory task list operations.
//!
//! All mutations are synchronous transformations over the locally owned
//! task list. Nothing is persisted and nothing is written back to the
//! API; the list lives and dies with the process.

pub mod store;

pub use store::{TaskStore, VisibleTask, remaining_label};

use thiserror::Error;

/// Errors from task list operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task title cannot be empty.
    #[error("task title cannot be empty")]
    TitleEmpty,
    /// Task title exceeds the maximum length.
    #[error("task title too long (max {0} characters)")]
    TitleTooLong(usize),
    /// Task with the given id was not found.
    #[error("task not found: {0}")]
    TaskNotFound(String),
}
