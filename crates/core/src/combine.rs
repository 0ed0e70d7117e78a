//! Aggregation over ordered sequences of outcomes.
//!
//! `combine` implements first-failure-wins: scanning stops at the earliest
//! `Failure` and that error is returned unchanged; later elements are never
//! pulled from the source. This is deliberately not symmetric in which error
//! surfaces when several elements fail - only the leftmost is reported.
//! Inputs are assumed already completed; running them concurrently first is
//! the caller's concern.

use either::Either;
use itertools::Itertools;

use crate::outcome::Outcome;

/// Collapse an ordered sequence of outcomes into one outcome over the
/// sequence of values.
///
/// The first `Failure` encountered wins and is returned unchanged; if every
/// element is a `Success`, the values are returned in input order. An empty
/// input vacuously yields `Success` of an empty vector.
///
/// # Examples
///
/// ```
/// use outcome_core::{combine, Outcome};
///
/// let all_good: Vec<Outcome<i32, &str>> =
///     vec![Outcome::success(1), Outcome::success(2)];
/// assert_eq!(combine(all_good), Outcome::success(vec![1, 2]));
///
/// let mixed: Vec<Outcome<i32, &str>> =
///     vec![Outcome::success(1), Outcome::failure("A"), Outcome::failure("B")];
/// assert_eq!(combine(mixed), Outcome::failure("A"));
/// ```
pub fn combine<T, E>(outcomes: impl IntoIterator<Item = Outcome<T, E>>) -> Outcome<Vec<T>, E> {
    outcomes.into_iter().collect()
}

/// Split a sequence into all success values and all error data, preserving
/// relative order within each side. The everything-reported counterpart to
/// first-failure-wins [`combine`].
pub fn partition<T, E>(outcomes: impl IntoIterator<Item = Outcome<T, E>>) -> (Vec<T>, Vec<E>) {
    outcomes.into_iter().partition_map(|outcome| match outcome {
        Outcome::Success(value) => Either::Left(value),
        Outcome::Failure(error) => Either::Right(error),
    })
}

/// Collects `Outcome` items the way std collects `Result` items:
/// `.collect::<Outcome<Vec<_>, _>>()` short-circuits on the first `Failure`.
impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut first_failure = None;
        let collected: V = ShortCircuit {
            inner: iter.into_iter(),
            failure: &mut first_failure,
        }
        .collect();

        match first_failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(collected),
        }
    }
}

/// Yields success values until the first failure, which it parks in
/// `failure` and ends the iteration, leaving the rest of the source
/// untouched.
struct ShortCircuit<'a, I, E> {
    inner: I,
    failure: &'a mut Option<E>,
}

impl<T, E, I> Iterator for ShortCircuit<'_, I, E>
where
    I: Iterator<Item = Outcome<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.inner.next()? {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(error) => {
                *self.failure = Some(error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_combine_first_failure_wins() {
        let outcomes: Vec<Outcome<i32, &str>> = vec![
            Outcome::success(1),
            Outcome::failure("A"),
            Outcome::success(2),
            Outcome::failure("B"),
        ];
        assert_eq!(combine(outcomes), Outcome::failure("A"));
    }

    #[test]
    fn test_combine_stops_pulling_after_first_failure() {
        let pulled = Cell::new(0);
        let source = [
            Outcome::<i32, &str>::success(1),
            Outcome::failure("A"),
            Outcome::success(2),
            Outcome::failure("B"),
        ]
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1));

        assert_eq!(combine(source), Outcome::failure("A"));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_combine_empty_is_vacuous_success() {
        let outcomes: Vec<Outcome<i32, &str>> = vec![];
        assert_eq!(combine(outcomes), Outcome::success(vec![]));
    }

    #[test]
    fn test_combine_all_success_preserves_order() {
        let outcomes: Vec<Outcome<i32, &str>> =
            vec![Outcome::success(1), Outcome::success(2), Outcome::success(3)];
        assert_eq!(combine(outcomes), Outcome::success(vec![1, 2, 3]));
    }

    #[test]
    fn test_collect_matches_combine() {
        let outcomes = || {
            vec![
                Outcome::<i32, &str>::success(1),
                Outcome::failure("A"),
                Outcome::success(2),
            ]
        };
        let collected: Outcome<Vec<i32>, &str> = outcomes().into_iter().collect();
        assert_eq!(collected, combine(outcomes()));
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let outcomes: Vec<Outcome<i32, &str>> = vec![
            Outcome::success(1),
            Outcome::failure("A"),
            Outcome::success(2),
            Outcome::failure("B"),
        ];
        assert_eq!(partition(outcomes), (vec![1, 2], vec!["A", "B"]));
    }
}
