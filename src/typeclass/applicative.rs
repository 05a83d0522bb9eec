//! Applicative type class: lifting values and combining independent contexts.

use super::functor::Functor;

/// A functor that can lift plain values and combine two contexts.
///
/// # Laws
///
/// ## Identity
///
/// ```text
/// pure(|x| x).apply(v) == v
/// ```
///
/// ## Homomorphism
///
/// ```text
/// pure(f).apply(pure(x)) == pure(f(x))
/// ```
///
/// # Examples
///
/// ```rust
/// use ngry::typeclass::Applicative;
///
/// let lifted: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(lifted, Some(42));
///
/// assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
/// assert_eq!(Some(1).map2(None::<i32>, |a, b| a + b), None);
/// ```
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the inner values of two contexts.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function held in `self` to the value held in `other`.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
