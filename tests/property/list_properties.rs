//! Property-based tests for the task store.
//!
//! Uses proptest to verify, over arbitrary lists:
//! 1. Toggling flips exactly one `completed` bit.
//! 2. Removing keeps the relative order of every survivor.
//! 3. Adding appends exactly one incomplete task with a fresh id.
//! 4. The visible list never contains a task with an unknown owner,
//!    and the heading always reports its length.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;

use todomatic::tasks::{TaskStore, remaining_label};
use todomatic_api::filter::Filter;
use todomatic_api::task::{Task, TaskId};
use todomatic_api::user::User;

/// Known users 1..=3; ids above that are "unknown owners".
fn known_users() -> Vec<User> {
    (1..=3)
        .map(|id| User {
            id,
            username: format!("user{id}"),
        })
        .collect()
}

/// Strategy for a task list with distinct server ids.
fn arb_task_list() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(
        (any::<bool>(), prop::option::of(1u64..=5), "[a-z ]{1,20}"),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (completed, user_id, title))| Task {
                id: TaskId::Server(i as u64 + 1),
                title,
                completed,
                user_id,
            })
            .collect()
    })
}

fn store_with(tasks: Vec<Task>) -> TaskStore {
    let mut store = TaskStore::new(256);
    store.replace(tasks);
    store
}

proptest! {
    /// Toggling any task flips its bit and nobody else's.
    #[test]
    fn toggle_flips_exactly_one_bit(tasks in arb_task_list(), idx in any::<prop::sample::Index>()) {
        prop_assume!(!tasks.is_empty());
        let i = idx.index(tasks.len());
        let target = tasks[i].id.clone();
        let was_completed = tasks[i].completed;
        let before: Vec<bool> = tasks.iter().map(|t| t.completed).collect();

        let mut store = store_with(tasks);
        store.toggle(&target).expect("toggle succeeds");

        let flips = store
            .tasks()
            .iter()
            .zip(&before)
            .filter(|(t, was)| t.completed != **was)
            .count();
        prop_assert_eq!(flips, 1);
        let toggled = store.tasks().iter().find(|t| t.id == target).unwrap();
        prop_assert_eq!(toggled.completed, !was_completed);
    }

    /// Removing any task keeps every survivor in its original relative order.
    #[test]
    fn remove_preserves_relative_order(tasks in arb_task_list(), idx in any::<prop::sample::Index>()) {
        prop_assume!(!tasks.is_empty());
        let target = tasks[idx.index(tasks.len())].id.clone();
        let expected: Vec<TaskId> = tasks
            .iter()
            .map(|t| t.id.clone())
            .filter(|id| *id != target)
            .collect();

        let mut store = store_with(tasks);
        store.remove(&target).expect("remove succeeds");

        let remaining: Vec<TaskId> = store.tasks().iter().map(|t| t.id.clone()).collect();
        prop_assert_eq!(remaining, expected);
    }

    /// Adding appends exactly one incomplete task with an unseen id.
    #[test]
    fn add_appends_fresh_incomplete_task(tasks in arb_task_list(), title in "[a-z]{1,20}") {
        let existing: Vec<TaskId> = tasks.iter().map(|t| t.id.clone()).collect();
        let len = tasks.len();

        let mut store = store_with(tasks);
        let id = store.add(&title, Some(1)).expect("add succeeds");

        prop_assert_eq!(store.len(), len + 1);
        prop_assert!(!existing.contains(&id));
        let added = store.tasks().last().unwrap();
        prop_assert_eq!(&added.id, &id);
        prop_assert!(!added.completed);
    }

    /// The visible list never leaks unknown owners, and the heading
    /// always counts it.
    #[test]
    fn visible_respects_owner_join_and_heading(tasks in arb_task_list()) {
        let users = known_users();
        let store = store_with(tasks);

        for filter in Filter::ALL {
            let visible = store.visible(filter, None, &users);
            for row in &visible {
                let uid = row.task.user_id.expect("visible tasks always have an owner");
                prop_assert!(users.iter().any(|u| u.id == uid));
                prop_assert!(filter.matches(row.task));
            }
            prop_assert!(remaining_label(visible.len()).starts_with(&visible.len().to_string()));
        }
    }

    /// Selecting a user restricts the view to exactly that owner's tasks.
    #[test]
    fn user_selection_restricts_to_owner(tasks in arb_task_list(), uid in 1u64..=3) {
        let users = known_users();
        let store = store_with(tasks);

        let visible = store.visible(Filter::All, Some(uid), &users);
        for row in &visible {
            prop_assert_eq!(row.task.user_id, Some(uid));
        }

        let expected = store
            .tasks()
            .iter()
            .filter(|t| t.user_id == Some(uid))
            .count();
        prop_assert_eq!(visible.len(), expected);
    }
}
