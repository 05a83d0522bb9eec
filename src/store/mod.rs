//! Reactive state containers.
//!
//! - [`Store`]: holds a current value and streams its distinct changes
//! - [`EntityCollectionStore`]: a store of an
//!   [`EntityCollection`](crate::persistent::EntityCollection) with one
//!   updater per collection operation
//! - [`Actions`]: a broadcast bus for dispatched actions
//! - [`distinct_until_changed`]: the deduplication used by every selection
//!
//! Change streams are unbounded `futures` channels. A slow subscriber never
//! blocks an update and never misses an intermediate state.

mod actions;
mod container;
mod distinct;
mod entity_store;

pub use actions::Actions;
pub use container::Store;
pub use distinct::distinct_until_changed;
pub use entity_store::EntityCollectionStore;
