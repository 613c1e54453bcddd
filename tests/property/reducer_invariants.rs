//! Property-based checks of the task reducer.
//!
//! Uses proptest to verify, over random action sequences:
//! 1. Task ids stay unique and `order` stays a dense 0-based permutation.
//! 2. Filter changes never alter the task list.
//! 3. Reordering preserves the multiset of tasks.
//! 4. A valid add grows the list by one and puts the new task first.
//! 5. Any persisted state survives encode → decode.

use std::collections::BTreeSet;

use proptest::prelude::*;
use tasklist_core::snapshot::{decode, encode};
use tasklist_core::{Action, AppState, Filter, MAX_TASK_TITLE_LENGTH, TaskId, Theme, reduce};

/// Index-based operation, resolved against the current state when applied.
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Delete(usize),
    Reorder(usize, usize),
    Filter(Filter),
    Theme(Theme),
}

fn arb_filter() -> impl Strategy<Value = Filter> {
    prop_oneof![Just(Filter::All), Just(Filter::Pending), Just(Filter::Completed)]
}

fn arb_theme() -> impl Strategy<Value = Theme> {
    prop_oneof![Just(Theme::Light), Just(Theme::Dark)]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => "[ a-zA-Z0-9]{0,40}".prop_map(Op::Add),
        2 => any::<usize>().prop_map(Op::Toggle),
        2 => any::<usize>().prop_map(Op::Delete),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::Reorder(a, b)),
        1 => arb_filter().prop_map(Op::Filter),
        1 => arb_theme().prop_map(Op::Theme),
    ]
}

fn id_at(state: &AppState, index: usize) -> TaskId {
    if state.tasks.is_empty() {
        TaskId::new()
    } else {
        state.tasks[index % state.tasks.len()].id.clone()
    }
}

fn to_action(state: &AppState, op: &Op) -> Action {
    match op {
        Op::Add(title) => Action::add_task(title.clone()),
        Op::Toggle(i) => Action::ToggleTask {
            id: id_at(state, *i),
        },
        Op::Delete(i) => Action::DeleteTask {
            id: id_at(state, *i),
        },
        Op::Reorder(from, to) => {
            // Mostly in range, with a slack of 2 to hit the clamping path.
            let bound = state.tasks.len() + 2;
            Action::ReorderTasks {
                from: from % bound,
                to: to % bound,
            }
        }
        Op::Filter(f) => Action::SetFilter(*f),
        Op::Theme(t) => Action::SetTheme(*t),
    }
}

fn ids(state: &AppState) -> BTreeSet<TaskId> {
    state.tasks.iter().map(|t| t.id.clone()).collect()
}

fn run(ops: &[Op]) -> AppState {
    ops.iter().fold(AppState::default(), |state, op| {
        let action = to_action(&state, op);
        reduce(state, &action)
    })
}

proptest! {
    #[test]
    fn invariants_hold_after_every_action(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut state = AppState::default();
        for op in &ops {
            let action = to_action(&state, op);
            state = reduce(state, &action);
            prop_assert_eq!(state.check_invariants(), Ok(()));
        }
    }

    #[test]
    fn filter_never_mutates_tasks(
        ops in prop::collection::vec(arb_op(), 0..30),
        filter in arb_filter(),
    ) {
        let state = run(&ops);
        let after = reduce(state.clone(), &Action::SetFilter(filter));
        prop_assert_eq!(&after.tasks, &state.tasks);
        for task in after.visible_tasks() {
            prop_assert!(filter.matches(task));
        }
        prop_assert_eq!(after.visible_tasks().len(), after.counts().for_filter(filter));
    }

    #[test]
    fn reorder_preserves_multiset(
        ops in prop::collection::vec(arb_op(), 0..30),
        from in any::<usize>(),
        to in any::<usize>(),
    ) {
        let state = run(&ops);
        let action = to_action(&state, &Op::Reorder(from, to));
        let after = reduce(state.clone(), &action);
        prop_assert_eq!(ids(&after), ids(&state));
        prop_assert_eq!(after.tasks.len(), state.tasks.len());
        for task in &after.tasks {
            let original = state.task(&task.id);
            prop_assert!(original.is_some_and(|o| o.title == task.title && o.is_completed == task.is_completed));
        }
    }

    #[test]
    fn valid_add_grows_by_one_and_goes_first(
        ops in prop::collection::vec(arb_op(), 0..30),
        title in "[a-z]{1,20}",
    ) {
        let state = run(&ops);
        let action = Action::add_task(title.clone());
        let after = reduce(state.clone(), &action);
        prop_assert_eq!(after.tasks.len(), state.tasks.len() + 1);
        prop_assert_eq!(&after.tasks[0].title, &title);
        prop_assert_eq!(after.tasks[0].order, 0);
        prop_assert!(after.error.is_empty());
    }

    #[test]
    fn overlong_add_is_rejected(
        ops in prop::collection::vec(arb_op(), 0..20),
        extra in 1usize..50,
    ) {
        let state = run(&ops);
        let title = "z".repeat(MAX_TASK_TITLE_LENGTH + extra);
        let after = reduce(state.clone(), &Action::add_task(title));
        prop_assert_eq!(&after.tasks, &state.tasks);
        prop_assert!(after.has_error());
    }

    #[test]
    fn snapshot_round_trips(ops in prop::collection::vec(arb_op(), 0..30)) {
        let state = run(&ops);
        let payload = encode(&state);
        prop_assert!(payload.is_ok());
        let decoded = payload.ok().map(|p| decode(&p));
        prop_assert!(matches!(decoded, Some(Ok(ref s)) if *s == state));
    }
}
