//! Property-based tests for the domain model.
//!
//! Uses proptest to verify:
//! 1. Any `Task` survives a JSON encode → decode round-trip.
//! 2. `Active` and `Completed` partition any task; `All` catches both.
//! 3. `TaskId`'s untagged JSON form never confuses the two variants.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;

use todomatic_api::filter::Filter;
use todomatic_api::task::{Task, TaskId};

// --- Strategies ---

/// Strategy for generating arbitrary `TaskId` values.
fn arb_task_id() -> impl Strategy<Value = TaskId> {
    prop_oneof![
        any::<u64>().prop_map(TaskId::Server),
        any::<u64>().prop_map(TaskId::local),
    ]
}

/// Strategy for generating arbitrary `Task` values.
fn arb_task() -> impl Strategy<Value = Task> {
    (
        arb_task_id(),
        "[^\x00]{0,128}",
        any::<bool>(),
        prop::option::of(1u64..=10),
    )
        .prop_map(|(id, title, completed, user_id)| Task {
            id,
            title,
            completed,
            user_id,
        })
}

// --- Property tests ---

proptest! {
    /// Any valid Task survives a JSON round-trip.
    #[test]
    fn task_json_round_trip(task in arb_task()) {
        let json = serde_json::to_string(&task).expect("serialize");
        let decoded: Task = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(task, decoded);
    }

    /// Active and Completed partition the task space; All matches both.
    #[test]
    fn filters_partition_tasks(task in arb_task()) {
        prop_assert!(Filter::All.matches(&task));
        prop_assert_ne!(
            Filter::Active.matches(&task),
            Filter::Completed.matches(&task)
        );
    }

    /// The untagged TaskId representation keeps variants apart: numbers
    /// decode as server ids, strings as local ids.
    #[test]
    fn task_id_round_trip_preserves_variant(id in arb_task_id()) {
        let json = serde_json::to_string(&id).expect("serialize");
        let decoded: TaskId = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(id.is_local(), decoded.is_local());
        prop_assert_eq!(id, decoded);
    }

    /// Local ids always carry the todo- prefix and never equal any
    /// server id.
    #[test]
    fn local_ids_are_prefixed(n in any::<u64>(), m in any::<u64>()) {
        let local = TaskId::local(n);
        prop_assert!(local.to_string().starts_with("todo-"));
        prop_assert_ne!(local, TaskId::Server(m));
    }
}
