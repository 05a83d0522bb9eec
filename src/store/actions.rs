//! The action bus.

use std::sync::Arc;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::future;
use futures::stream::{Stream, StreamExt};
use parking_lot::Mutex;

/// Broadcasts dispatched actions to every live subscriber.
///
/// Unlike [`Store`](super::Store) there is no current value: a subscriber
/// only sees actions dispatched after it subscribed. Clones share the bus.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use futures::StreamExt;
/// use ngry::store::Actions;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Action {
///     Load(u32),
///     Reset,
/// }
///
/// let actions = Actions::new();
/// let loads = actions.of(|action: &Action| match action {
///     Action::Load(id) => Some(*id),
///     Action::Reset => None,
/// });
///
/// actions.dispatch(Action::Load(1));
/// actions.dispatch(Action::Reset);
/// actions.dispatch(Action::Load(2));
/// drop(actions);
///
/// assert_eq!(block_on(loads.collect::<Vec<_>>()), vec![1, 2]);
/// ```
pub struct Actions<A> {
    subscribers: Arc<Mutex<Vec<UnboundedSender<A>>>>,
}

impl<A: Clone> Actions<A> {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sends `action` to every subscriber.
    pub fn dispatch(&self, action: A) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|subscriber| subscriber.unbounded_send(action.clone()).is_ok());
        tracing::trace!(subscribers = subscribers.len(), "action dispatched");
    }

    /// Returns a function that dispatches to this bus.
    pub fn dispatcher(&self) -> impl Fn(A) + Clone + use<A> {
        let actions = self.clone();
        move |action| actions.dispatch(action)
    }

    /// Subscribes to every action dispatched from now on.
    ///
    /// The stream ends once every handle to the bus has been dropped.
    #[must_use]
    pub fn stream(&self) -> UnboundedReceiver<A> {
        let (sender, receiver) = mpsc::unbounded();
        self.subscribers.lock().push(sender);
        receiver
    }

    /// Subscribes to the actions `projection` accepts, yielding what it
    /// extracts from them.
    pub fn of<B, F>(&self, projection: F) -> impl Stream<Item = B> + use<A, B, F>
    where
        F: Fn(&A) -> Option<B>,
    {
        self.stream()
            .filter_map(move |action| future::ready(projection(&action)))
    }
}

impl<A: Clone> Default for Actions<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for Actions<A> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}
