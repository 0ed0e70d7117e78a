//! Railway-oriented outcome handling.
//!
//! [`Outcome<T, E>`] represents a computation that either succeeded with a
//! `T` or failed with error data `E`, replacing panicking control flow for
//! *expected* failure modes. Callers compose producers with pure
//! combinators instead of branching at every step, and narrow once at the
//! end:
//!
//! ```
//! use outcome_core::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>()
//!         .map_err(|_| format!("not a port: {raw}"))
//!         .into_outcome()
//! }
//!
//! let display = parse_port("8080")
//!     .and_then(|port| {
//!         if port >= 1024 {
//!             Outcome::success(port)
//!         } else {
//!             Outcome::failure(format!("reserved port: {port}"))
//!         }
//!     })
//!     .map(|port| format!("listening on :{port}"))
//!     .get_or_else_with(|error| format!("refusing to start: {error}"));
//!
//! assert_eq!(display, "listening on :8080");
//! ```
//!
//! A `Failure` is inert: every combinator passes it through unchanged until
//! a caller narrows it. Aggregation over sequences is first-failure-wins
//! ([`combine`]), and [`Boundary`] adapts panicking or future-based
//! operations into outcome-returning ones without ever swallowing
//! unexpected panics.

/// Panic interop: catching expected panics into failures
pub mod boundary;
/// Aggregation over ordered sequences of outcomes
pub mod combine;
/// std Result/Option bridges and opt-in logged narrowers
pub mod ext;
/// The sum type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;

pub use boundary::{Boundary, BoundaryError, PanicReport};
pub use combine::{combine, partition};
pub use ext::{IntoOutcome, OptionExt, OutcomeExt};
pub use outcome::Outcome;
