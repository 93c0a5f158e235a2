//! User model for the remote to-do API.

use serde::{Deserialize, Serialize};

/// A user from `GET /users`. Read-only after the initial fetch.
///
/// The fixture API returns many more fields (address, company, ...);
/// only the ones the task list needs are kept, the rest are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id, referenced by [`crate::task::Task::user_id`].
    pub id: u64,
    /// Display name for the user selector and task rows.
    pub username: String,
}
