//! Monad type class: sequencing computations that depend on earlier results.

use super::applicative::Applicative;

/// An applicative whose next step can depend on the current inner value.
///
/// # Laws
///
/// ## Left Identity
///
/// ```text
/// pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity
///
/// ```text
/// m.flat_map(pure) == m
/// ```
///
/// ## Associativity
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Runs `function` on the inner value and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ngry::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).flat_map(|n| Some(n * 2)), Some(10));
    /// assert_eq!(Some(5).flat_map(|n| if n > 10 { Some(n) } else { None }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the inner value of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1), Some("x"), Some("x"))]
    #[case(None, Some("x"), None)]
    fn option_then_propagates_absence(
        #[case] first: Option<i32>,
        #[case] next: Option<&'static str>,
        #[case] expected: Option<&'static str>,
    ) {
        assert_eq!(first.then(next), expected);
    }
}
