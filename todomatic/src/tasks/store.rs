//! Task store: the single owner of the in-memory task list.
//!
//! Mutations go through [`TaskStore`] so that every edit touches exactly
//! one entry and the rest of the list keeps its relative order. The store
//! also computes the *visible* slice of the list: filter predicate, then
//! user selection, then the join against the fetched user list (tasks
//! whose owner is unknown are silently dropped from display).

use todomatic_api::filter::Filter;
use todomatic_api::task::{Task, TaskId};
use todomatic_api::user::User;

use super::TaskError;

/// A task joined with its owner's username, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleTask<'a> {
    /// The underlying task.
    pub task: &'a Task,
    /// Username of the owning user.
    pub username: &'a str,
}

/// Owns the task list and applies all mutations to it.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// Counter for minting `todo-N` ids; advanced past collisions.
    next_local_id: u64,
    max_title_len: usize,
}

impl TaskStore {
    /// Creates an empty store with the given title length limit.
    #[must_use]
    pub const fn new(max_title_len: usize) -> Self {
        Self {
            tasks: Vec::new(),
            next_local_id: 1,
            max_title_len,
        }
    }

    /// Replaces the list wholesale with a freshly fetched one.
    ///
    /// The local id counter restarts just past the list length, matching
    /// the `todo-{len + 1}` convention for the first task added by hand.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.next_local_id = u64::try_from(tasks.len()).unwrap_or(u64::MAX).saturating_add(1);
        self.tasks = tasks;
    }

    /// All tasks, unfiltered, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks, unfiltered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a new task with a fresh local id.
    ///
    /// The task starts with `completed = false` and is owned by
    /// `user_id` (the currently selected user, or none).
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TitleEmpty`] for a blank title or
    /// [`TaskError::TitleTooLong`] past the configured limit.
    pub fn add(&mut self, title: &str, user_id: Option<u64>) -> Result<TaskId, TaskError> {
        let title = title.trim();
        self.validate_title(title)?;

        let id = self.mint_local_id();
        self.tasks
            .push(Task::new(id.clone(), title.to_string(), user_id));
        Ok(id)
    }

    /// Replaces the title of exactly one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] for an unknown id, or a title
    /// validation error.
    pub fn rename(&mut self, id: &TaskId, title: &str) -> Result<(), TaskError> {
        let title = title.trim();
        self.validate_title(title)?;

        let task = self.get_mut(id)?;
        task.title = title.to_string();
        Ok(())
    }

    /// Flips the `completed` flag of exactly one task.
    ///
    /// Returns the new value of the flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] for an unknown id.
    pub fn toggle(&mut self, id: &TaskId) -> Result<bool, TaskError> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Removes exactly one task by id, preserving the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TaskNotFound`] for an unknown id.
    pub fn remove(&mut self, id: &TaskId) -> Result<Task, TaskError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == *id)
            .ok_or_else(|| TaskError::TaskNotFound(id.to_string()))?;
        Ok(self.tasks.remove(idx))
    }

    /// The tasks to render: filter predicate, then user selection, then
    /// the join against `users`.
    ///
    /// A task whose `user_id` matches no entry in `users` (including
    /// tasks with no owner at all) is excluded without error.
    #[must_use]
    pub fn visible<'a>(
        &'a self,
        filter: Filter,
        selected_user: Option<u64>,
        users: &'a [User],
    ) -> Vec<VisibleTask<'a>> {
        self.tasks
            .iter()
            .filter(|t| filter.matches(t))
            .filter(|t| selected_user.is_none_or(|uid| t.user_id == Some(uid)))
            .filter_map(|t| {
                let owner = t.user_id.and_then(|uid| users.iter().find(|u| u.id == uid))?;
                Some(VisibleTask {
                    task: t,
                    username: &owner.username,
                })
            })
            .collect()
    }

    fn validate_title(&self, title: &str) -> Result<(), TaskError> {
        if title.is_empty() {
            return Err(TaskError::TitleEmpty);
        }
        if title.chars().count() > self.max_title_len {
            return Err(TaskError::TitleTooLong(self.max_title_len));
        }
        Ok(())
    }

    /// Mints a `todo-N` id distinct from every id currently in the list.
    fn mint_local_id(&mut self) -> TaskId {
        loop {
            let candidate = TaskId::local(self.next_local_id);
            self.next_local_id += 1;
            if !self.tasks.iter().any(|t| t.id == candidate) {
                return candidate;
            }
        }
    }

    fn get_mut(&mut self, id: &TaskId) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| TaskError::TaskNotFound(id.to_string()))
    }
}

/// Pluralized heading for the visible count: `"1 task remaining"`,
/// `"0 tasks remaining"`, `"3 tasks remaining"`.
#[must_use]
pub fn remaining_label(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{count} {noun} remaining")
}
