//! The boundary between panicking code and outcome-returning code.
//!
//! Wrapping a panicking operation only makes sense for panics that encode
//! *expected* failures (a parser that asserts on bad input, a third-party
//! call that panics on a missing key). Genuine faults - invariant
//! violations, out-of-memory - must keep unwinding. Which panics count as
//! expected is domain knowledge, so [`Boundary`] takes the classification
//! as an explicit predicate instead of hardcoding a list.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::{self, UnwindSafe};

use futures::FutureExt;
use thiserror::Error;

use crate::outcome::Outcome;

/// A captured panic payload.
///
/// Wraps the `Box<dyn Any + Send>` the unwind machinery hands back, with
/// best-effort message extraction for the common string payloads.
pub struct PanicReport {
    payload: Box<dyn Any + Send>,
}

impl PanicReport {
    fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// The panic message, when the payload is one of the string types
    /// produced by `panic!`. Non-string payloads yield `None`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Re-raise the captured panic, continuing the unwind as if it had
    /// never been caught.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for PanicReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanicReport")
            .field("message", &self.message())
            .finish()
    }
}

/// Ready-made error data for callers who do not need a custom `E` at the
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    /// The wrapped operation panicked with the given message.
    #[error("operation panicked: {message}")]
    Panic { message: String },
}

impl BoundaryError {
    /// Create a panic error.
    pub fn panic(message: impl Into<String>) -> Self {
        Self::Panic {
            message: message.into(),
        }
    }
}

impl From<PanicReport> for BoundaryError {
    fn from(report: PanicReport) -> Self {
        Self::panic(report.message().unwrap_or("non-string panic payload"))
    }
}

/// Scoped acquisition around panicking operations.
///
/// `expected` classifies each caught panic: `true` means the panic encodes
/// an expected failure and is converted to a `Failure`; `false` means it is
/// a genuine fault and the unwind resumes. Panics are never swallowed.
///
/// # Examples
///
/// ```
/// use outcome_core::{Boundary, BoundaryError, Outcome};
///
/// let boundary = Boundary::lenient();
/// let ok: Outcome<i32, BoundaryError> = boundary.catch(|| 42, BoundaryError::from);
/// assert_eq!(ok, Outcome::success(42));
///
/// let bad: Outcome<i32, BoundaryError> =
///     boundary.catch(|| panic!("missing"), BoundaryError::from);
/// assert_eq!(bad, Outcome::failure(BoundaryError::panic("missing")));
/// ```
pub struct Boundary<P> {
    expected: P,
}

fn every_panic_expected(_: &PanicReport) -> bool {
    true
}

impl Boundary<fn(&PanicReport) -> bool> {
    /// A boundary that treats every panic as an expected failure.
    #[must_use]
    pub fn lenient() -> Self {
        Self::new(every_panic_expected)
    }
}

impl<P> Boundary<P>
where
    P: Fn(&PanicReport) -> bool,
{
    /// A boundary with an explicit expected-panic classifier.
    pub const fn new(expected: P) -> Self {
        Self { expected }
    }

    /// Run `op`, converting an expected panic into a `Failure` via
    /// `convert`. Normal completion becomes `Success`; an unexpected panic
    /// resumes unwinding.
    pub fn catch<T, E, F, M>(&self, op: F, convert: M) -> Outcome<T, E>
    where
        F: FnOnce() -> T + UnwindSafe,
        M: FnOnce(PanicReport) -> E,
    {
        match panic::catch_unwind(op) {
            Ok(value) => Outcome::success(value),
            Err(payload) => self.convert_or_resume(PanicReport::new(payload), convert),
        }
    }

    /// Await `fut`, applying the same conversion rule to its completion.
    ///
    /// Introduces no suspension points of its own; it only observes the
    /// outcome of a future the caller already built. Futures that are not
    /// statically unwind-safe can be wrapped in
    /// [`std::panic::AssertUnwindSafe`].
    pub async fn catch_future<T, E, Fut, M>(&self, fut: Fut, convert: M) -> Outcome<T, E>
    where
        Fut: Future<Output = T> + UnwindSafe,
        M: FnOnce(PanicReport) -> E,
    {
        match fut.catch_unwind().await {
            Ok(value) => Outcome::success(value),
            Err(payload) => self.convert_or_resume(PanicReport::new(payload), convert),
        }
    }

    fn convert_or_resume<T, E, M>(&self, report: PanicReport, convert: M) -> Outcome<T, E>
    where
        M: FnOnce(PanicReport) -> E,
    {
        if (self.expected)(&report) {
            tracing::debug!(
                message = report.message().unwrap_or("non-string panic payload"),
                "converting expected panic into failure"
            );
            Outcome::failure(convert(report))
        } else {
            report.resume()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use std::panic::AssertUnwindSafe;

    use super::*;

    fn quiet_hook<R>(run: impl FnOnce() -> R) -> R {
        // keep expected-panic tests from spamming stderr
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        let result = run();
        panic::set_hook(previous);
        result
    }

    #[test]
    fn test_catch_normal_completion() {
        let outcome: Outcome<i32, BoundaryError> =
            Boundary::lenient().catch(|| 42, BoundaryError::from);
        assert_eq!(outcome, Outcome::success(42));
    }

    #[test]
    fn test_catch_converts_expected_panic() {
        let outcome: Outcome<i32, BoundaryError> = quiet_hook(|| {
            Boundary::lenient().catch(|| panic!("missing"), BoundaryError::from)
        });
        assert_eq!(outcome, Outcome::failure(BoundaryError::panic("missing")));
    }

    #[test]
    fn test_catch_maps_through_caller_error_type() {
        let outcome: Outcome<i32, String> = quiet_hook(|| {
            Boundary::lenient().catch(
                || panic!("missing"),
                |report| format!("lookup failed: {}", report.message().unwrap_or("?")),
            )
        });
        assert_eq!(outcome, Outcome::failure("lookup failed: missing".to_string()));
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_catch_resumes_unexpected_panic() {
        let boundary = Boundary::new(|report: &PanicReport| report.message() == Some("missing"));
        let _: Outcome<i32, BoundaryError> =
            boundary.catch(|| panic!("boom"), BoundaryError::from);
    }

    #[test]
    fn test_owned_string_panic_message() {
        let id = 7;
        let outcome: Outcome<i32, BoundaryError> = quiet_hook(|| {
            Boundary::lenient().catch(|| panic!("no row {id}"), BoundaryError::from)
        });
        assert_eq!(outcome, Outcome::failure(BoundaryError::panic("no row 7")));
    }

    #[tokio::test]
    async fn test_catch_future_normal_completion() {
        let outcome: Outcome<i32, BoundaryError> = Boundary::lenient()
            .catch_future(AssertUnwindSafe(async { 42 }), BoundaryError::from)
            .await;
        assert_eq!(outcome, Outcome::success(42));
    }

    #[tokio::test]
    async fn test_catch_future_converts_expected_panic() {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        let outcome: Outcome<i32, BoundaryError> = Boundary::lenient()
            .catch_future(
                AssertUnwindSafe(async { panic!("missing") }),
                BoundaryError::from,
            )
            .await;
        panic::set_hook(previous);
        assert_eq!(outcome, Outcome::failure(BoundaryError::panic("missing")));
    }
}
