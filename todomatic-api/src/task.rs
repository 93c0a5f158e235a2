//! Task model for the remote to-do API.
//!
//! Tasks arrive from `GET /todos` with numeric server ids; tasks created
//! locally get a `todo-N` string id and never round-trip to the server.
//! The JSON shape uses camelCase keys (`userId`).

use serde::{Deserialize, Serialize};

/// Maximum allowed task title length in characters.
pub const MAX_TASK_TITLE_LENGTH: usize = 256;

/// Unique identifier for a task.
///
/// The remote API assigns numeric ids; ids minted on this side are
/// `todo-N` strings so the two namespaces can never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    /// Server-assigned numeric id.
    Server(u64),
    /// Locally generated id of the form `todo-N`.
    Local(String),
}

impl TaskId {
    /// Creates a local id of the form `todo-N`.
    #[must_use]
    pub fn local(n: u64) -> Self {
        Self::Local(format!("todo-{n}"))
    }

    /// Whether this id was minted locally (never sent to the server).
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Server(n) => write!(f, "{n}"),
            Self::Local(s) => write!(f, "{s}"),
        }
    }
}

/// A to-do item owned by a user.
///
/// Tasks are plain value types: every edit replaces the entry in the owning
/// list rather than aliasing it, so equality comparisons stay cheap and
/// honest. `user_id` is a foreign key into the fetched user list; a task
/// whose owner is unknown is hidden from display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Task title as shown in the list.
    pub title: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Owning user's id, if any.
    #[serde(default)]
    pub user_id: Option<u64>,
}

impl Task {
    /// Creates a fresh, not-yet-completed task.
    #[must_use]
    pub const fn new(id: TaskId, title: String, user_id: Option<u64>) -> Self {
        Self {
            id,
            title,
            completed: false,
            user_id,
        }
    }
}
