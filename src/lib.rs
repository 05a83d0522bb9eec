//! # ngry
//!
//! Immutable entity collections, task state tracking, reactive stores and
//! translation helpers.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` over GAT-emulated
//!   higher-kinded types
//! - **Entity Collections**: identity-keyed immutable collections whose no-op
//!   updates share storage with the receiver
//! - **Task State**: `Initial`, `Pending`, `Complete` or `Failed` as a value,
//!   plus streams reporting the progress of async work
//! - **Stores**: current-value containers with distinct change streams
//! - **Translation**: language resolution, phrase compilation and
//!   interpolation
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `persistent`: Entity collections
//! - `rx`: Task state and task streams
//! - `testing`: `StreamSpy` for asserting on streams (Tokio)
//! - `store`: Stores and the action bus
//! - `translate`: Internationalization
//! - `serde`: `Serialize`/`Deserialize` for task states and collections
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ngry::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let users = EntityCollectionStore::new(EntityCollection::empty(KeyedBy(|user: &User| user.id)));
//! users.add(User { id: 1, name: "Alex" });
//!
//! let loaded: TaskState<usize, String> = TaskState::complete(users.get(|users| users.len()));
//! assert_eq!(loaded.get_result(|| 0), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ngry::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "rx")]
    pub use crate::rx::{task, task_stream, TaskState, TaskStatus};

    #[cfg(feature = "store")]
    pub use crate::store::*;

    #[cfg(feature = "translate")]
    pub use crate::translate::{Language, Params, TranslateConfig, Translator};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "rx")]
pub mod rx;

#[cfg(feature = "store")]
pub mod store;

#[cfg(feature = "translate")]
pub mod translate;
