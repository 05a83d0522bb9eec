//! Unit tests for TaskState combinators.

#![cfg(feature = "rx")]

use std::cell::RefCell;

use ngry::rx::{TaskState, TaskStatus};
use rstest::rstest;

type State = TaskState<i32, String>;

fn failed(message: &str) -> State {
    TaskState::failed(message.to_string())
}

// =============================================================================
// map / flat_map
// =============================================================================

#[rstest]
#[case(State::initial(), TaskState::initial())]
#[case(State::pending(), TaskState::pending())]
#[case(failed("Some"), TaskState::failed("Some".to_string()))]
#[case(State::complete(123), TaskState::complete("123".to_string()))]
fn test_map_transforms_only_complete(#[case] state: State, #[case] expected: TaskState<String, String>) {
    assert_eq!(state.map(|n| n.to_string()), expected);
}

#[rstest]
fn test_chained_map_and_flat_map() {
    let total = State::complete(1)
        .map(|n| n + 1)
        .flat_map(|n| TaskState::complete(n * 10))
        .flat_map(|n| if n > 10 { TaskState::complete(n + 3) } else { TaskState::pending() })
        .get_result(|| 0);

    assert_eq!(total, 23);
}

#[rstest]
#[case(TaskState::initial())]
#[case(TaskState::pending())]
#[case(TaskState::complete(7))]
#[case(failed("inner"))]
fn test_flat_map_of_complete_yields_any_state(#[case] inner: State) {
    let expected = inner.clone();

    assert_eq!(State::complete(1).flat_map(|_| inner), expected);
}

#[rstest]
fn test_flat_map_of_failed_keeps_error() {
    assert_eq!(failed("first").flat_map(|n| State::complete(n + 1)), failed("first"));
}

// =============================================================================
// catch_map / map_error
// =============================================================================

#[rstest]
fn test_catch_map_recovers_failure() {
    let recovered: TaskState<i32, ()> = failed("Some").catch_map(|error| TaskState::complete(error.len() as i32));

    assert_eq!(recovered, TaskState::complete(4));
}

#[rstest]
#[case(State::initial())]
#[case(State::pending())]
#[case(State::complete(5))]
fn test_catch_map_leaves_non_failed(#[case] state: State) {
    let expected = state.clone();

    assert_eq!(state.catch_map(|_| State::complete(0)), expected);
}

#[rstest]
fn test_map_error_changes_error_type() {
    let mapped: TaskState<i32, usize> = failed("boom").map_error(|error| error.len());

    assert_eq!(mapped, TaskState::failed(4));
}

// =============================================================================
// for_each / catch_run
// =============================================================================

#[rstest]
fn test_for_each_runs_once_on_complete() {
    let calls = RefCell::new(Vec::new());

    let state = State::complete(5).for_each(|n| calls.borrow_mut().push(*n));

    assert_eq!(*calls.borrow(), vec![5]);
    assert_eq!(state.map(|n| n * 2), TaskState::complete(10));
}

#[rstest]
#[case(State::initial())]
#[case(State::pending())]
#[case(failed("x"))]
fn test_for_each_skips_other_states(#[case] state: State) {
    let mut called = false;

    let _ = state.for_each(|_| called = true);

    assert!(!called);
}

#[rstest]
fn test_catch_run_observes_error() {
    let mut seen = None;

    let state = failed("offline").catch_run(|error| seen = Some(error.clone()));

    assert_eq!(seen.as_deref(), Some("offline"));
    assert!(state.is_failed());
}

// =============================================================================
// get_result / accessors
// =============================================================================

#[rstest]
#[case(State::initial(), -1)]
#[case(State::pending(), -1)]
#[case(failed("x"), -1)]
#[case(State::complete(42), 42)]
fn test_get_result_falls_back(#[case] state: State, #[case] expected: i32) {
    assert_eq!(state.get_result(|| -1), expected);
}

#[rstest]
fn test_into_value_and_error() {
    assert_eq!(State::complete(3).into_value(), Some(3));
    assert_eq!(State::pending().into_value(), None);
    assert_eq!(failed("e").into_error(), Some("e".to_string()));
}

#[rstest]
#[case(State::initial(), false)]
#[case(State::pending(), false)]
#[case(State::complete(1), true)]
#[case(failed("x"), true)]
fn test_is_terminal(#[case] state: State, #[case] expected: bool) {
    assert_eq!(state.is_terminal(), expected);
}

#[rstest]
fn test_status_orders_lifecycle() {
    assert!(TaskStatus::Initial < TaskStatus::Pending);
    assert!(TaskStatus::Pending < TaskStatus::Complete);
}

#[rstest]
fn test_as_ref_borrows_payload() {
    let state = State::complete(9);

    assert_eq!(state.as_ref().map(|n| *n + 1), TaskState::complete(10));
    assert_eq!(state, State::complete(9));
}
