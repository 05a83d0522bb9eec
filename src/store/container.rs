//! The current-value state container.

use std::fmt;
use std::sync::Arc;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::stream::{Stream, StreamExt};
use parking_lot::Mutex;

use super::distinct::distinct_until_changed;

struct Inner<State> {
    initial: State,
    state: State,
    subscribers: Vec<UnboundedSender<State>>,
    destroyed: bool,
}

impl<State: Clone> Inner<State> {
    fn publish(&mut self) {
        let state = &self.state;
        self.subscribers
            .retain(|subscriber| subscriber.unbounded_send(state.clone()).is_ok());
    }
}

/// A state container that always holds a current value.
///
/// Every subscriber of [`Store::changes`] receives the current state first and
/// then each later state that differs from the one before it. Updates are
/// serialised; subscribers never miss an intermediate state.
///
/// `Store` is a cheap handle: clones share the same state.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use futures::StreamExt;
/// use ngry::store::Store;
///
/// let counter = Store::new(0);
/// let changes = counter.changes();
///
/// counter.update(|count| count + 1);
/// counter.next(1); // same value, not emitted
/// counter.reset();
/// counter.destroy();
///
/// let seen: Vec<i32> = block_on(changes.collect());
/// assert_eq!(seen, vec![0, 1, 0]);
/// ```
pub struct Store<State> {
    inner: Arc<Mutex<Inner<State>>>,
}

impl<State> Store<State>
where
    State: Clone + PartialEq,
{
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: State) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: initial.clone(),
                initial,
                subscribers: Vec::new(),
                destroyed: false,
            })),
        }
    }

    /// Returns the state the store was created with.
    #[must_use]
    pub fn initial(&self) -> State {
        self.inner.lock().initial.clone()
    }

    /// Returns the current state.
    #[must_use]
    pub fn snapshot(&self) -> State {
        self.inner.lock().state.clone()
    }

    /// Reads a projection of the current state without cloning it.
    pub fn get<R, F>(&self, selector: F) -> R
    where
        F: FnOnce(&State) -> R,
    {
        selector(&self.inner.lock().state)
    }

    /// Replaces the current state.
    ///
    /// Subscribers are notified only when `state` differs from the current
    /// one. Ignored once the store is destroyed.
    pub fn next(&self, state: State) {
        let mut inner = self.inner.lock();
        Self::apply(&mut inner, state);
    }

    /// Replaces the current state with `updater(&current)`.
    ///
    /// The read and the write happen under one lock, so concurrent updates
    /// never overwrite each other. `updater` must not call back into this
    /// store.
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&State) -> State,
    {
        let mut inner = self.inner.lock();
        let state = updater(&inner.state);
        Self::apply(&mut inner, state);
    }

    /// Restores the initial state.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        let initial = inner.initial.clone();
        Self::apply(&mut inner, initial);
    }

    fn apply(inner: &mut Inner<State>, state: State) {
        if inner.destroyed {
            tracing::warn!("state update ignored: store is destroyed");
            return;
        }
        if inner.state == state {
            tracing::trace!("state unchanged");
            return;
        }

        inner.state = state;
        inner.publish();
        tracing::trace!(subscribers = inner.subscribers.len(), "state changed");
    }

    /// Returns a stream of the current state followed by every distinct
    /// change. The stream ends when the store is destroyed; a destroyed
    /// store yields an empty stream.
    #[must_use]
    pub fn changes(&self) -> UnboundedReceiver<State> {
        let (sender, receiver) = mpsc::unbounded();
        let mut inner = self.inner.lock();

        if !inner.destroyed && sender.unbounded_send(inner.state.clone()).is_ok() {
            inner.subscribers.push(sender);
        }
        receiver
    }

    /// Returns a stream of `selector` applied to each state, skipping
    /// consecutive equal results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use futures::StreamExt;
    /// use ngry::store::Store;
    ///
    /// let store = Store::new((1, "a"));
    /// let numbers = store.select(|(number, _)| *number);
    ///
    /// store.next((1, "b"));
    /// store.next((2, "b"));
    /// store.destroy();
    ///
    /// assert_eq!(block_on(numbers.collect::<Vec<_>>()), vec![1, 2]);
    /// ```
    pub fn select<R, F>(&self, mut selector: F) -> impl Stream<Item = R> + use<R, F, State>
    where
        F: FnMut(&State) -> R,
        R: Clone + PartialEq,
    {
        distinct_until_changed(self.changes().map(move |state| selector(&state)))
    }

    /// Folds every item of `source` into the state with `reducer` until the
    /// source ends or the store is destroyed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use futures::stream;
    /// use ngry::store::Store;
    ///
    /// let total = Store::new(0);
    /// block_on(total.effect(stream::iter([1, 2, 3]), |sum, n| sum + n));
    ///
    /// assert_eq!(total.snapshot(), 6);
    /// ```
    pub async fn effect<S, F>(&self, source: S, mut reducer: F)
    where
        S: Stream,
        F: FnMut(&State, S::Item) -> State,
    {
        let mut source = std::pin::pin!(source);

        while let Some(item) = source.next().await {
            if self.is_destroyed() {
                tracing::debug!("effect stopped: store is destroyed");
                break;
            }
            self.update(|state| reducer(state, item));
        }
    }
}

impl<State> Store<State> {
    /// Completes every change stream. Later updates are ignored.
    pub fn destroy(&self) {
        let mut inner = self.inner.lock();
        if !inner.destroyed {
            inner.destroyed = true;
            inner.subscribers.clear();
            tracing::debug!("store destroyed");
        }
    }

    /// Returns `true` once [`Store::destroy`] has been called.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.inner.lock().destroyed
    }
}

impl<State> Clone for Store<State> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<State> Default for Store<State>
where
    State: Clone + PartialEq + Default,
{
    fn default() -> Self {
        Self::new(State::default())
    }
}

impl<State: fmt::Debug> fmt::Debug for Store<State> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        formatter
            .debug_struct("Store")
            .field("state", &inner.state)
            .field("destroyed", &inner.destroyed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use rstest::rstest;

    #[rstest]
    fn snapshot_tracks_latest_state() {
        let store = Store::new("initial".to_string());

        store.next("next".to_string());

        assert_eq!(store.snapshot(), "next");
        assert_eq!(store.initial(), "initial");
    }

    #[rstest]
    fn late_subscriber_receives_current_state_first() {
        let store = Store::new(1);
        store.next(2);

        let changes = store.changes();
        store.next(3);
        store.destroy();

        assert_eq!(block_on(changes.collect::<Vec<_>>()), vec![2, 3]);
    }

    #[rstest]
    fn destroyed_store_ignores_updates() {
        let store = Store::new(1);
        store.destroy();

        store.next(2);

        assert_eq!(store.snapshot(), 1);
        assert!(store.is_destroyed());
        assert_eq!(block_on(store.changes().collect::<Vec<_>>()), Vec::<i32>::new());
    }

    #[rstest]
    fn dropped_subscribers_are_pruned() {
        let store = Store::new(0);
        drop(store.changes());
        let _kept = store.changes();

        store.next(1);

        assert_eq!(store.inner.lock().subscribers.len(), 1);
    }

    #[rstest]
    fn get_reads_projection() {
        let store = Store::new(vec![1, 2, 3]);
        assert_eq!(store.get(Vec::len), 3);
    }
}
