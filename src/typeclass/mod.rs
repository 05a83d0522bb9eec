//! Type class traits for the context types in this crate.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: mapping over a context's value
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations
//!
//! They are implemented for `Option` and for
//! [`TaskState`](crate::rx::TaskState), so generic code can chain task states
//! the same way it chains optional values.
//!
//! # Examples
//!
//! ```rust
//! use ngry::typeclass::{Functor, Monad};
//!
//! let value = Some(2).fmap(|n| n + 1).flat_map(|n| Some(n * 10));
//! assert_eq!(value, Some(30));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
