//! Property-based tests for TaskState.
//!
//! - **Functor identity**: `state.fmap(|x| x) == state`
//! - **Functor composition**: `state.fmap(f).fmap(g) == state.fmap(|x| g(f(x)))`
//! - **Monad left identity**: `pure(a).flat_map(f) == f(a)`
//! - **Monad right identity**: `m.flat_map(pure) == m`
//! - **Recovery**: `catch_map` only ever sees `Failed`

#![cfg(all(feature = "rx", feature = "typeclass"))]

use ngry::rx::TaskState;
use ngry::typeclass::{Applicative, Functor, Monad};
use proptest::prelude::*;

type State = TaskState<i32, String>;

fn state_strategy() -> impl Strategy<Value = State> {
    prop_oneof![
        Just(TaskState::initial()),
        Just(TaskState::pending()),
        any::<i32>().prop_map(TaskState::complete),
        "[a-z]{0,8}".prop_map(TaskState::failed),
    ]
}

fn halve_even(n: i32) -> State {
    if n % 2 == 0 {
        TaskState::complete(n / 2)
    } else {
        TaskState::failed(format!("{n} is odd"))
    }
}

fn pending_if_negative(n: i32) -> State {
    if n < 0 { TaskState::pending() } else { TaskState::complete(n) }
}

proptest! {
    #[test]
    fn prop_functor_identity(state in state_strategy()) {
        prop_assert_eq!(state.clone().fmap(|x| x), state);
    }

    #[test]
    fn prop_functor_composition(state in state_strategy()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);

        prop_assert_eq!(state.clone().fmap(f).fmap(g), state.fmap(|x| g(f(x))));
    }

    #[test]
    fn prop_fmap_ref_matches_fmap(state in state_strategy()) {
        let by_ref = state.fmap_ref(|x| i64::from(*x) + 1);

        prop_assert_eq!(by_ref, state.fmap(|x| i64::from(x) + 1));
    }

    #[test]
    fn prop_monad_left_identity(value in any::<i32>()) {
        let lifted: State = <State as Applicative>::pure(value);

        prop_assert_eq!(Monad::flat_map(lifted, halve_even), halve_even(value));
    }

    #[test]
    fn prop_monad_right_identity(state in state_strategy()) {
        prop_assert_eq!(state.clone().flat_map(TaskState::complete), state);
    }

    #[test]
    fn prop_monad_associativity(state in state_strategy()) {
        let nested = state.clone().flat_map(halve_even).flat_map(pending_if_negative);
        let flattened = state.flat_map(|x| halve_even(x).flat_map(pending_if_negative));

        prop_assert_eq!(nested, flattened);
    }

    #[test]
    fn prop_non_complete_status_survives_map(state in state_strategy()) {
        prop_assume!(!state.is_complete());

        prop_assert_eq!(state.clone().map(|x| x + 1).status(), state.status());
    }

    #[test]
    fn prop_catch_map_only_sees_failed(state in state_strategy()) {
        let recovered: TaskState<i32, ()> = state
            .clone()
            .catch_map(|error| TaskState::complete(i32::try_from(error.len()).unwrap_or(i32::MAX)));

        match state {
            TaskState::Failed(error) => {
                prop_assert_eq!(recovered, TaskState::complete(i32::try_from(error.len()).unwrap_or(i32::MAX)));
            }
            other => {
                prop_assert_eq!(recovered.status(), other.status());
            }
        }
    }

    #[test]
    fn prop_map2_complete_only_when_both_complete(left in state_strategy(), right in state_strategy()) {
        let combined = left.clone().map2(right.clone(), i32::wrapping_add);

        prop_assert_eq!(combined.is_complete(), left.is_complete() && right.is_complete());
        if left.is_failed() {
            prop_assert_eq!(combined.error(), left.error());
        }
    }

    #[test]
    fn prop_get_result_is_value_or_fallback(state in state_strategy()) {
        let expected = state.result().copied().unwrap_or(-1);

        prop_assert_eq!(state.get_result(|| -1), expected);
    }
}
