//! Extension traits bridging std types to [`Outcome`] and opt-in logged
//! narrowers.
//!
//! Combinators on `Outcome` itself never log; the `*_logged` helpers here
//! are explicit narrowing points a caller reaches for deliberately when an
//! error is about to be discarded.

use crate::outcome::Outcome;

/// Convert a standard `Result` into an [`Outcome`] in method position.
pub trait IntoOutcome<T, E> {
    /// Re-express this value as an `Outcome`.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}

/// Railway-style conversions from `Option`.
pub trait OptionExt<T> {
    /// `Some` becomes `Success`; `None` becomes `Failure` with the given
    /// error data, eagerly evaluated.
    fn ok_or_failure<E>(self, error: E) -> Outcome<T, E>;

    /// `Some` becomes `Success`; `None` becomes `Failure` with lazily
    /// computed error data.
    fn ok_or_failure_with<E, F: FnOnce() -> E>(self, error: F) -> Outcome<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_failure<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(error),
        }
    }

    fn ok_or_failure_with<E, F: FnOnce() -> E>(self, error: F) -> Outcome<T, E> {
        match self {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(error()),
        }
    }
}

/// Opt-in logged narrowers for outcomes whose error is about to be dropped.
pub trait OutcomeExt<T> {
    /// Narrow to an `Option`, logging the error being discarded.
    fn into_option_logged(self) -> Option<T>;

    /// Extract the value or a default, logging the error being discarded.
    fn get_or_else_logged(self, default: T) -> T;
}

impl<T, E: std::fmt::Display> OutcomeExt<T> for Outcome<T, E> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(error) => {
                tracing::error!("operation failed: {error}");
                None
            }
        }
    }

    fn get_or_else_logged(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                tracing::error!("operation failed, using default: {error}");
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_result_into_outcome() {
        let ok: Result<i32, String> = Ok(5);
        let err: Result<i32, String> = Err("e".into());
        assert_eq!(ok.into_outcome(), Outcome::success(5));
        assert_eq!(err.into_outcome(), Outcome::failure("e".to_string()));
    }

    #[test]
    fn test_option_into_outcome() {
        assert_eq!(Some(5).ok_or_failure("absent"), Outcome::success(5));
        assert_eq!(None::<i32>.ok_or_failure("absent"), Outcome::failure("absent"));
        assert_eq!(
            None::<i32>.ok_or_failure_with(|| "absent".to_string()),
            Outcome::failure("absent".to_string())
        );
    }

    #[test]
    fn test_logged_narrowers() {
        let success: Outcome<i32, String> = Outcome::success(3);
        let failure: Outcome<i32, String> = Outcome::failure("nope".into());
        assert_eq!(success.clone().into_option_logged(), Some(3));
        assert_eq!(failure.clone().into_option_logged(), None);
        assert_eq!(success.get_or_else_logged(0), 3);
        assert_eq!(failure.get_or_else_logged(0), 0);
    }
}
