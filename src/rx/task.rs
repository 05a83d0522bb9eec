//! Running asynchronous work as a stream of [`TaskState`]s.

use std::future::Future;

use futures::stream::{self, Stream, StreamExt};

use super::task_state::TaskState;

/// Runs a single asynchronous operation and reports its progress.
///
/// The returned stream yields `Pending` first and then exactly one terminal
/// state: `Complete` for `Ok`, `Failed` for `Err`. `executor` is not called
/// until the stream is polled past `Pending`.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use futures::StreamExt;
/// use ngry::rx::{task, TaskState};
///
/// let states: Vec<TaskState<u32, String>> =
///     block_on(task(|| async { Ok(7) }).collect());
///
/// assert_eq!(states, vec![TaskState::pending(), TaskState::complete(7)]);
/// ```
pub fn task<T, E, F, Fut>(executor: F) -> impl Stream<Item = TaskState<T, E>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let terminal = stream::once(async move {
        let outcome = executor().await;
        if outcome.is_err() {
            tracing::debug!("task failed");
        }
        TaskState::from(outcome)
    });

    stream::once(async { TaskState::Pending }).chain(terminal)
}

/// Runs an operation that produces several results over time.
///
/// Yields `Pending`, then a `Complete` state for every `Ok` item. The first
/// `Err` is yielded as `Failed` and ends the stream: the source is dropped
/// without being polled again.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use futures::stream;
/// use futures::StreamExt;
/// use ngry::rx::{task_stream, TaskState};
///
/// let states: Vec<TaskState<u32, &str>> = block_on(
///     task_stream(|| stream::iter(vec![Ok(1), Err("lost"), Ok(3)])).collect(),
/// );
///
/// assert_eq!(
///     states,
///     vec![
///         TaskState::pending(),
///         TaskState::complete(1),
///         TaskState::failed("lost"),
///     ]
/// );
/// ```
pub fn task_stream<T, E, F, S>(executor: F) -> impl Stream<Item = TaskState<T, E>>
where
    F: FnOnce() -> S,
    S: Stream<Item = Result<T, E>>,
{
    let source = Box::pin(stream::once(async move { executor() }).flatten());

    // `None` once a failure was yielded; the source is never polled again.
    let results = stream::unfold(Some(source), |source| async move {
        let mut source = source?;
        let outcome = source.next().await?;
        let source = if outcome.is_err() {
            tracing::debug!("task stream failed");
            None
        } else {
            Some(source)
        };
        Some((TaskState::from(outcome), source))
    });

    stream::once(async { TaskState::Pending }).chain(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use rstest::rstest;

    #[rstest]
    fn task_reports_failure_after_pending() {
        let states: Vec<TaskState<(), &str>> =
            block_on(task(|| async { Err("Some error") }).collect());

        assert_eq!(states, vec![TaskState::pending(), TaskState::failed("Some error")]);
    }

    #[rstest]
    fn task_does_not_run_executor_before_poll() {
        let mut called = false;
        let states = task(|| {
            called = true;
            async { Ok::<_, ()>(1) }
        });
        drop(states);

        assert!(!called);
    }

    #[rstest]
    fn task_stream_completes_for_every_item() {
        let states: Vec<TaskState<u8, ()>> =
            block_on(task_stream(|| stream::iter(vec![Ok(1), Ok(2)])).collect());

        assert_eq!(
            states,
            vec![TaskState::pending(), TaskState::complete(1), TaskState::complete(2)]
        );
    }

    #[rstest]
    fn task_stream_ends_when_source_stays_open_after_error() {
        let source = || stream::iter(vec![Ok(1), Err("boom")]).chain(stream::pending());
        let states: Vec<TaskState<u8, &str>> = block_on(task_stream(source).collect());

        assert_eq!(
            states,
            vec![TaskState::pending(), TaskState::complete(1), TaskState::failed("boom")]
        );
    }

    #[rstest]
    fn task_stream_of_nothing_stays_pending() {
        let states: Vec<TaskState<u8, ()>> =
            block_on(task_stream(|| stream::iter(Vec::new())).collect());

        assert_eq!(states, vec![TaskState::pending()]);
    }
}
