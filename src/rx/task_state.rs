//! Task state - the lifecycle of an asynchronous operation as a value.
//!
//! [`TaskState`] is either `Initial`, `Pending`, `Complete(result)` or
//! `Failed(error)`. Errors are data: nothing here panics or returns `Err`.
//!
//! ```text
//! Initial ──► Pending ──► Complete(result)
//!                    └──► Failed(error)
//! ```
//!
//! Terminal states never go back to `Pending`; a retry is a fresh
//! [`TaskState::pending`].
//!
//! # Examples
//!
//! ```rust
//! use ngry::rx::TaskState;
//!
//! let loaded: TaskState<i32, String> = TaskState::complete(20);
//! let total = loaded
//!     .map(|n| n + 1)
//!     .flat_map(|n| TaskState::complete(n * 2))
//!     .get_result(|| 0);
//! assert_eq!(total, 42);
//!
//! let failed: TaskState<i32, String> = TaskState::failed("offline".to_string());
//! let recovered = failed.catch_map(|_| TaskState::<i32, String>::complete(0));
//! assert_eq!(recovered, TaskState::complete(0));
//! ```

use std::fmt;

#[cfg(feature = "typeclass")]
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// The discriminant of a [`TaskState`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TaskStatus {
    /// The task has not been started.
    Initial,
    /// The task is running.
    Pending,
    /// The task finished with a result.
    Complete,
    /// The task finished with an error.
    Failed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Initial => "initial",
            Self::Pending => "pending",
            Self::Complete => "complete",
            Self::Failed => "failed",
        };
        formatter.write_str(label)
    }
}

/// The state of an asynchronous task.
///
/// # Type Parameters
///
/// * `T` - The result type carried by `Complete`
/// * `E` - The error type carried by `Failed`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "status", content = "value", rename_all = "lowercase")
)]
pub enum TaskState<T, E> {
    /// The task has not been started.
    Initial,
    /// The task is running.
    Pending,
    /// The task finished with a result.
    Complete(T),
    /// The task finished with an error.
    Failed(E),
}

impl<T, E> TaskState<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an `Initial` state.
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self::Initial
    }

    /// Creates a `Pending` state.
    #[inline]
    #[must_use]
    pub const fn pending() -> Self {
        Self::Pending
    }

    /// Creates a `Complete` state holding `result`.
    #[inline]
    #[must_use]
    pub const fn complete(result: T) -> Self {
        Self::Complete(result)
    }

    /// Creates a `Failed` state holding `error`.
    #[inline]
    #[must_use]
    pub const fn failed(error: E) -> Self {
        Self::Failed(error)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the discriminant.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        match self {
            Self::Initial => TaskStatus::Initial,
            Self::Pending => TaskStatus::Pending,
            Self::Complete(_) => TaskStatus::Complete,
            Self::Failed(_) => TaskStatus::Failed,
        }
    }

    /// Returns `true` for `Initial`.
    #[inline]
    #[must_use]
    pub const fn is_initial(&self) -> bool {
        matches!(self, Self::Initial)
    }

    /// Returns `true` for `Pending`.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` for `Complete`.
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns `true` for `Failed`.
    #[inline]
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns `true` for `Complete` and `Failed`.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete(_) | Self::Failed(_))
    }

    /// Returns the result when `Complete`.
    #[inline]
    #[must_use]
    pub const fn result(&self) -> Option<&T> {
        match self {
            Self::Complete(result) => Some(result),
            _ => None,
        }
    }

    /// Returns the error when `Failed`.
    #[inline]
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Consumes the state, returning the result when `Complete`.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Complete(result) => Some(result),
            _ => None,
        }
    }

    /// Consumes the state, returning the error when `Failed`.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> TaskState<&T, &E> {
        match self {
            Self::Initial => TaskState::Initial,
            Self::Pending => TaskState::Pending,
            Self::Complete(result) => TaskState::Complete(result),
            Self::Failed(error) => TaskState::Failed(error),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the result of a `Complete` state; other states pass through
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ngry::rx::TaskState;
    ///
    /// let done: TaskState<i32, ()> = TaskState::complete(123);
    /// assert_eq!(done.map(|n| n.to_string()), TaskState::complete("123".to_string()));
    ///
    /// let pending: TaskState<i32, ()> = TaskState::pending();
    /// assert_eq!(pending.map(|n| n.to_string()), TaskState::pending());
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> TaskState<B, E>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Initial => TaskState::Initial,
            Self::Pending => TaskState::Pending,
            Self::Complete(result) => TaskState::Complete(function(result)),
            Self::Failed(error) => TaskState::Failed(error),
        }
    }

    /// Transforms the error of a `Failed` state; other states pass through
    /// unchanged.
    #[inline]
    pub fn map_error<B, F>(self, function: F) -> TaskState<T, B>
    where
        F: FnOnce(E) -> B,
    {
        match self {
            Self::Initial => TaskState::Initial,
            Self::Pending => TaskState::Pending,
            Self::Complete(result) => TaskState::Complete(result),
            Self::Failed(error) => TaskState::Failed(function(error)),
        }
    }

    /// Replaces a `Complete` state with the state `function` returns for its
    /// result, which may have any status. Other states pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ngry::rx::TaskState;
    ///
    /// let first: TaskState<u32, ()> = TaskState::complete(1);
    /// assert_eq!(first.flat_map(|_| TaskState::<u32, ()>::pending()), TaskState::pending());
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> TaskState<B, E>
    where
        F: FnOnce(T) -> TaskState<B, E>,
    {
        match self {
            Self::Initial => TaskState::Initial,
            Self::Pending => TaskState::Pending,
            Self::Complete(result) => function(result),
            Self::Failed(error) => TaskState::Failed(error),
        }
    }

    /// Replaces a `Failed` state with the state `function` returns for its
    /// error. Other states pass through unchanged.
    #[inline]
    pub fn catch_map<B, F>(self, function: F) -> TaskState<T, B>
    where
        F: FnOnce(E) -> TaskState<T, B>,
    {
        match self {
            Self::Initial => TaskState::Initial,
            Self::Pending => TaskState::Pending,
            Self::Complete(result) => TaskState::Complete(result),
            Self::Failed(error) => function(error),
        }
    }

    /// Runs `function` on the result of a `Complete` state and returns the
    /// state unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ngry::rx::TaskState;
    ///
    /// let mut seen = Vec::new();
    /// let state: TaskState<i32, ()> = TaskState::complete(5).for_each(|n| seen.push(*n));
    ///
    /// assert_eq!(seen, vec![5]);
    /// assert_eq!(state, TaskState::complete(5));
    /// ```
    #[inline]
    #[must_use]
    pub fn for_each<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Complete(result) = &self {
            function(result);
        }
        self
    }

    /// Runs `function` on the error of a `Failed` state and returns the state
    /// unchanged.
    #[inline]
    #[must_use]
    pub fn catch_run<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failed(error) = &self {
            function(error);
        }
        self
    }

    /// Returns the result of a `Complete` state, otherwise the value of
    /// `fallback`.
    #[inline]
    pub fn get_result<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Complete(result) => result,
            _ => fallback(),
        }
    }
}

impl<T, E> Default for TaskState<T, E> {
    fn default() -> Self {
        Self::Initial
    }
}

impl<T, E> From<Result<T, E>> for TaskState<T, E> {
    /// `Ok` becomes `Complete`, `Err` becomes `Failed`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Complete(value),
            Err(error) => Self::Failed(error),
        }
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T, E> TypeConstructor for TaskState<T, E> {
    type Inner = T;
    type WithType<B> = TaskState<B, E>;
}

#[cfg(feature = "typeclass")]
impl<T, E: Clone> Functor for TaskState<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> TaskState<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> TaskState<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function).map_error(E::clone)
    }
}

/// Combining two states keeps the most significant non-complete status:
/// `Failed` (left first), then `Pending`, then `Initial`.
#[cfg(feature = "typeclass")]
impl<T, E: Clone> Applicative for TaskState<T, E> {
    #[inline]
    fn pure<B>(value: B) -> TaskState<B, E> {
        TaskState::Complete(value)
    }

    fn map2<B, C, F>(self, other: TaskState<B, E>, function: F) -> TaskState<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Complete(left), TaskState::Complete(right)) => {
                TaskState::Complete(function(left, right))
            }
            (Self::Failed(error), _) | (_, TaskState::Failed(error)) => TaskState::Failed(error),
            (Self::Pending, _) | (_, TaskState::Pending) => TaskState::Pending,
            _ => TaskState::Initial,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: TaskState<B, E>) -> TaskState<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

#[cfg(feature = "typeclass")]
impl<T, E: Clone> Monad for TaskState<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> TaskState<B, E>
    where
        F: FnOnce(T) -> TaskState<B, E>,
    {
        Self::flat_map(self, function)
    }
}
