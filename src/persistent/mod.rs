//! Persistent (immutable) collections.
//!
//! - [`EntityCollection`]: an ordered set of entities keyed by an identity
//!   strategy, with copy-on-write updates that return the receiver's storage
//!   when nothing changed.
//!
//! # Structural Sharing
//!
//! Collections keep their contents behind `Arc`. Cloning a collection, or
//! running an operation that has nothing to change, is O(1) and leaves both
//! values pointing at the same storage.
//!
//! # Examples
//!
//! ```rust
//! use ngry::persistent::{EntityCollection, KeyedBy};
//!
//! let numbers = EntityCollection::new(KeyedBy(|n: &u32| *n), [1, 2, 3]);
//! let without_two = numbers.delete(&2);
//!
//! assert_eq!(numbers.len(), 3); // Original unchanged
//! assert_eq!(without_two.entities(), &[1, 3]);
//!
//! // Deleting a missing id hands back the same storage
//! assert!(numbers.delete(&9).ptr_eq(&numbers));
//! ```

mod entity_collection;

pub use entity_collection::EntityCollection;
pub use entity_collection::EntityIdentity;
pub use entity_collection::KeyedBy;
pub use entity_collection::KeyedByWith;
