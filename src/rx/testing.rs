//! Test instrumentation for streams.
//!
//! [`StreamSpy`] subscribes to a stream on a Tokio task and records every
//! item it yields, so a test can assert on what was emitted and wait for a
//! given number of items or for the end of the stream. Spies over `Result`
//! items can also wait for the first error.
//!
//! # Examples
//!
//! ```rust
//! use futures::stream;
//! use ngry::rx::testing::StreamSpy;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let spy = StreamSpy::new(stream::iter(vec![1, 3, 5]));
//!
//! spy.when_complete().await.unwrap();
//! assert_eq!(spy.values(), vec![1, 3, 5]);
//! # });
//! ```

use std::fmt;

use futures::stream::{Stream, StreamExt};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Errors reported while waiting on a [`StreamSpy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpyError {
    /// The stream ended, or the spy was disposed, before the awaited
    /// condition held.
    #[error("spied stream closed before the condition was met")]
    Closed,
}

#[derive(Debug)]
struct Recording<T> {
    values: Vec<T>,
    complete: bool,
    disposed: bool,
}

/// Records the items of a stream as they are produced.
///
/// Dropping the spy disposes it.
pub struct StreamSpy<T> {
    recording: watch::Sender<Recording<T>>,
    handle: JoinHandle<()>,
}

impl<T> StreamSpy<T>
where
    T: Send + Sync + 'static,
{
    /// Starts recording `stream` on a new Tokio task.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        let (recording, _) = watch::channel(Recording {
            values: Vec::new(),
            complete: false,
            disposed: false,
        });
        let sink = recording.clone();

        let handle = tokio::spawn(async move {
            let mut stream = std::pin::pin!(stream);
            while let Some(value) = stream.next().await {
                sink.send_if_modified(|recording| {
                    if recording.disposed {
                        return false;
                    }
                    recording.values.push(value);
                    true
                });
            }
            sink.send_if_modified(|recording| {
                if recording.disposed {
                    return false;
                }
                recording.complete = true;
                true
            });
        });

        Self { recording, handle }
    }
}

impl<T> StreamSpy<T> {
    /// Returns a copy of every item recorded so far, in emission order.
    #[must_use]
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.recording.borrow().values.clone()
    }

    /// Returns the number of items recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.recording.borrow().values.len()
    }

    /// Returns `true` once the stream has ended on its own.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.recording.borrow().complete
    }

    /// Returns `true` once [`StreamSpy::dispose`] has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.recording.borrow().disposed
    }

    /// Waits until at least `count` items have been recorded.
    ///
    /// # Errors
    ///
    /// Returns [`SpyError::Closed`] when the stream ends or the spy is
    /// disposed with fewer items recorded.
    pub async fn when_count(&self, count: usize) -> Result<(), SpyError> {
        let mut receiver = self.recording.subscribe();
        let recording = receiver
            .wait_for(|recording| {
                recording.values.len() >= count || recording.complete || recording.disposed
            })
            .await
            .map_err(|_| SpyError::Closed)?;

        if recording.values.len() >= count {
            Ok(())
        } else {
            Err(SpyError::Closed)
        }
    }

    /// Waits until the stream has ended.
    ///
    /// # Errors
    ///
    /// Returns [`SpyError::Closed`] when the spy is disposed first.
    pub async fn when_complete(&self) -> Result<(), SpyError> {
        let mut receiver = self.recording.subscribe();
        let recording = receiver
            .wait_for(|recording| recording.complete || recording.disposed)
            .await
            .map_err(|_| SpyError::Closed)?;

        if recording.complete {
            Ok(())
        } else {
            Err(SpyError::Closed)
        }
    }

    /// Stops recording. Values already recorded stay readable; the stream is
    /// never reported complete afterwards. Calling it twice has no effect.
    pub fn dispose(&self) {
        let changed = self.recording.send_if_modified(|recording| {
            if recording.disposed {
                return false;
            }
            recording.disposed = true;
            true
        });
        if changed {
            self.handle.abort();
            tracing::trace!("stream spy disposed");
        }
    }
}

/// Failure tracking for spies over fallible streams.
impl<T, E> StreamSpy<Result<T, E>> {
    /// Returns the first recorded error, if any.
    #[must_use]
    pub fn error(&self) -> Option<E>
    where
        E: Clone,
    {
        self.recording
            .borrow()
            .values
            .iter()
            .find_map(|value| value.as_ref().err().cloned())
    }

    /// Waits until an error has been recorded.
    ///
    /// # Errors
    ///
    /// Returns [`SpyError::Closed`] when the stream ends or the spy is
    /// disposed without an error.
    pub async fn when_error(&self) -> Result<(), SpyError> {
        let mut receiver = self.recording.subscribe();
        let recording = receiver
            .wait_for(|recording| {
                recording.values.iter().any(Result::is_err)
                    || recording.complete
                    || recording.disposed
            })
            .await
            .map_err(|_| SpyError::Closed)?;

        if recording.values.iter().any(Result::is_err) {
            Ok(())
        } else {
            Err(SpyError::Closed)
        }
    }
}

impl<T> Drop for StreamSpy<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T: fmt::Debug> fmt::Debug for StreamSpy<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recording = self.recording.borrow();
        formatter
            .debug_struct("StreamSpy")
            .field("values", &recording.values)
            .field("complete", &recording.complete)
            .field("disposed", &recording.disposed)
            .finish()
    }
}
