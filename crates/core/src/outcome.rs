//! The `Outcome` sum type: success-with-value or failure-with-error.
//!
//! `Outcome<T, E>` models *expected* failure modes (not-found, validation,
//! permission-denied) as ordinary data instead of panicking control flow.
//! Unexpected faults stay panics; see [`crate::boundary`] for the conversion
//! point between the two worlds.
//!
//! All combinators are pure: they consume their input and return a fresh
//! value, never mutate, never log, and never panic. The only panicking
//! operations in this module are the two guard accessors
//! ([`Outcome::unwrap_success`] / [`Outcome::unwrap_failure`]), whose
//! contract is precisely to assert the variant.

use std::fmt;

use serde::{Deserialize, Serialize};

use Outcome::{Failure, Success};

/// A computation result: either a `Success` carrying a value of type `T`,
/// or a `Failure` carrying error data of type `E`.
///
/// `E` is ordinary data chosen by the caller - a string, an error code, a
/// `thiserror` enum - and is never required to implement
/// [`std::error::Error`].
///
/// # Examples
///
/// ```
/// use outcome_core::Outcome;
///
/// fn find_user(id: u32) -> Outcome<&'static str, String> {
///     match id {
///         1 => Outcome::success("alice"),
///         _ => Outcome::failure(format!("no user with id {id}")),
///     }
/// }
///
/// let greeting = find_user(1).map(|name| format!("hello, {name}"));
/// assert_eq!(greeting, Outcome::success("hello, alice".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with error data.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wrap a value in the `Success` variant. Total: cannot fail.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Success(value)
    }

    /// Wrap error data in the `Failure` variant. Total: cannot fail.
    #[must_use]
    pub const fn failure(error: E) -> Self {
        Failure(error)
    }

    // =========================================================================
    // Narrowing
    // =========================================================================

    /// `true` iff this is a `Success`. Exactly one of `is_success` /
    /// `is_failure` holds for any value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// `true` iff this is a `Failure`.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Narrow to the success value, discarding a failure.
    #[must_use]
    pub fn into_success(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Narrow to the error data, discarding a success.
    #[must_use]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Borrowing view: `Outcome<&T, &E>` over the original.
    #[must_use]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match *self {
            Success(ref value) => Success(value),
            Failure(ref error) => Failure(error),
        }
    }

    /// Exhaustive match as a function: both handlers are mandatory
    /// positional parameters, so no arm can be forgotten at a call site
    /// that prefers combinator style over a `match` expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// let label = Outcome::<u32, String>::success(7)
    ///     .fold(|v| format!("got {v}"), |e| format!("failed: {e}"));
    /// assert_eq!(label, "got 7");
    /// ```
    pub fn fold<R>(self, on_success: impl FnOnce(T) -> R, on_failure: impl FnOnce(E) -> R) -> R {
        match self {
            Success(value) => on_success(value),
            Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transform the success channel, passing a `Failure` through verbatim.
    /// `op` is never invoked on a `Failure`.
    ///
    /// Functor laws hold: `o.map(|v| v) == o` and
    /// `o.map(f).map(g) == o.map(|v| g(f(v)))`.
    #[must_use]
    pub fn map<U>(self, op: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Success(value) => Success(op(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Transform the error channel, passing a `Success` through verbatim.
    /// Dual of [`Outcome::map`].
    #[must_use]
    pub fn map_failure<F>(self, op: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(op(error)),
        }
    }

    /// Sequential chaining: on `Success` the next step runs and decides the
    /// result; on `Failure` the chain short-circuits and the error
    /// propagates unchanged, `op` never invoked.
    ///
    /// Associativity holds:
    /// `r.and_then(f).and_then(g) == r.and_then(|v| f(v).and_then(g))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// fn half(n: u32) -> Outcome<u32, &'static str> {
    ///     if n % 2 == 0 { Outcome::success(n / 2) } else { Outcome::failure("odd") }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(half).and_then(half), Outcome::success(2));
    /// assert_eq!(Outcome::success(6).and_then(half).and_then(half), Outcome::failure("odd"));
    /// ```
    #[must_use]
    pub fn and_then<U>(self, op: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(value) => op(value),
            Failure(error) => Failure(error),
        }
    }

    /// Recovery dual of [`Outcome::and_then`]: on `Failure` the handler runs
    /// and decides the result; a `Success` passes through verbatim.
    #[must_use]
    pub fn or_else<F>(self, op: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => op(error),
        }
    }

    /// Extract the success value, or fall back to an eagerly evaluated
    /// default. Callers needing a lazy or error-aware default use
    /// [`Outcome::get_or_else_with`].
    #[must_use]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Extract the success value, or compute a fallback from the error.
    #[must_use]
    pub fn get_or_else_with(self, op: impl FnOnce(E) -> T) -> T {
        match self {
            Success(value) => value,
            Failure(error) => op(error),
        }
    }

    /// Observe the success value without consuming the outcome chain.
    #[must_use]
    pub fn tap_success(self, op: impl FnOnce(&T)) -> Self {
        if let Success(ref value) = self {
            op(value);
        }
        self
    }

    /// Observe the error data without consuming the outcome chain.
    #[must_use]
    pub fn tap_failure(self, op: impl FnOnce(&E)) -> Self {
        if let Failure(ref error) = self {
            op(error);
        }
        self
    }

    // =========================================================================
    // Guard accessors
    // =========================================================================

    /// Assert the `Success` variant and return its value.
    ///
    /// # Panics
    ///
    /// Panics with the error's `Debug` rendering when called on a
    /// `Failure`. Illegal access never returns a silent default; prefer
    /// narrowing ([`Outcome::into_success`], `match`, [`Outcome::fold`])
    /// outside of tests and invariant checks.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn unwrap_success(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Success(value) => value,
            Failure(error) => {
                panic!("called `Outcome::unwrap_success` on a `Failure` value: {error:?}")
            }
        }
    }

    /// Assert the `Failure` variant and return its error data.
    ///
    /// # Panics
    ///
    /// Panics with the value's `Debug` rendering when called on a
    /// `Success`.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Success(value) => {
                panic!("called `Outcome::unwrap_failure` on a `Success` value: {value:?}")
            }
            Failure(error) => error,
        }
    }

    // =========================================================================
    // std::result interop
    // =========================================================================

    /// Build an outcome from a standard `Result` without loss.
    #[must_use]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }

    /// Convert to a standard `Result` without loss, re-enabling the `?`
    /// operator at call sites that compose with `Result`-returning code.
    /// (`std::ops::Try` is unstable, so `Outcome` itself does not carry
    /// `?` support.)
    #[must_use]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
