//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` or
//! `TaskState<_, E>` directly. [`TypeConstructor`] names the current inner
//! type and lets a trait speak about "the same constructor applied to `B`",
//! which is all `Functor` and `Monad` need.
//!
//! # Example
//!
//! ```rust
//! use ngry::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let cleared: Option<String> = reset(Some(42));
//! assert_eq!(cleared, None);
//! ```

/// A type constructor applied to some inner type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
