//! Reactive helpers: task state tracking over `futures` streams.
//!
//! - [`TaskState`]: the lifecycle of an asynchronous operation as a value
//! - [`task`] and [`task_stream`]: run async work and emit its states
//! - [`testing::StreamSpy`]: record a stream's items in tests (requires the
//!   `testing` feature)
//!
//! # Examples
//!
//! ```rust
//! use futures::executor::block_on;
//! use futures::StreamExt;
//! use ngry::rx::{task, TaskState};
//!
//! let last = block_on(async {
//!     let states: Vec<TaskState<&str, ()>> = task(|| async { Ok("loaded") }).collect().await;
//!     states.last().cloned()
//! });
//!
//! assert_eq!(last, Some(TaskState::complete("loaded")));
//! ```

mod task;
mod task_state;
#[cfg(feature = "testing")]
pub mod testing;

pub use task::task;
pub use task::task_stream;
pub use task_state::TaskState;
pub use task_state::TaskStatus;
