use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::{Failure, Result};

/// The outcome of running a computation that may fail: either its value or
/// the [`Failure`] it raised.
///
/// Panics are captured as well as returned errors, so an attempt can turn
/// any computation into a plain value that can be stored, mapped and
/// inspected later.
#[derive(Debug, Clone)]
pub enum Attempt<T> {
    Success(T),
    Failure(Failure),
}

impl<T> Attempt<T> {
    /// Run `f`, capturing a panic as a failure.
    pub fn of(f: impl FnOnce() -> T) -> Self {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Attempt::Success(value),
            Err(payload) => Attempt::Failure(Failure::from_panic(payload)),
        }
    }

    /// Run a fallible `f`, capturing both its error and a panic as a
    /// failure.
    pub fn try_of<E>(f: impl FnOnce() -> std::result::Result<T, E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Attempt::of(f).flat_map(Attempt::from_result)
    }

    pub fn from_result<E>(result: std::result::Result<T, E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Attempt::Success(value),
            Err(error) => Attempt::Failure(Failure::from_error(error)),
        }
    }

    pub fn success(value: T) -> Self {
        Attempt::Success(value)
    }

    pub fn failure(failure: Failure) -> Self {
        Attempt::Failure(failure)
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Attempt::Success(_))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Apply `f` to a successful value. A panic in `f` becomes a failure;
    /// an existing failure is passed along untouched.
    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Attempt<R> {
        match self {
            Attempt::Success(value) => Attempt::of(|| f(value)),
            Attempt::Failure(failure) => Attempt::Failure(failure),
        }
    }

    pub fn flat_map<R>(self, f: impl FnOnce(T) -> Attempt<R>) -> Attempt<R> {
        match self {
            Attempt::Success(value) => f(value),
            Attempt::Failure(failure) => Attempt::Failure(failure),
        }
    }

    pub fn value_or_error(self) -> Result<T> {
        match self {
            Attempt::Success(value) => Ok(value),
            Attempt::Failure(failure) => Err(failure),
        }
    }

    pub fn ok(self) -> Option<T> {
        self.value_or_error().ok()
    }

    pub fn err(self) -> Option<Failure> {
        self.value_or_error().err()
    }
}

impl<T> From<Attempt<T>> for Result<T> {
    fn from(attempt: Attempt<T>) -> Self {
        attempt.value_or_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("negative input")]
    struct Negative;

    fn checked_sqrt(x: i32) -> std::result::Result<i32, Negative> {
        if x < 0 {
            Err(Negative)
        } else {
            Ok((x as f64).sqrt() as i32)
        }
    }

    #[test]
    fn test_of_success() {
        let attempt = Attempt::of(|| 10);
        assert!(attempt.is_success());
        assert!(!attempt.is_failure());
        assert_eq!(attempt.ok(), Some(10));
    }

    #[test]
    fn test_of_panic() {
        let attempt: Attempt<i32> = Attempt::of(|| panic!("no value"));
        assert!(attempt.is_failure());
        match attempt.err() {
            Some(Failure::Panicked(message)) => assert_eq!(message, "no value"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_try_of_error() {
        let attempt = Attempt::try_of(|| checked_sqrt(-4));
        assert_eq!(
            attempt.err().map(|failure| failure.to_string()),
            Some("computation failed: negative input".to_string())
        );
    }

    #[test]
    fn test_map_captures_panic() {
        let attempt = Attempt::success(3).map(|x: i32| {
            if x == 3 {
                panic!("three");
            }
            x
        });
        assert!(attempt.is_failure());
    }

    #[test]
    fn test_flat_map() {
        let attempt = Attempt::success(16).flat_map(|x| Attempt::from_result(checked_sqrt(x)));
        assert_eq!(attempt.value_or_error().ok(), Some(4));
        let attempt = Attempt::success(-1).flat_map(|x| Attempt::from_result(checked_sqrt(x)));
        assert!(attempt.is_failure());
    }

    #[test]
    fn test_failure_passes_through_map() {
        let attempt: Attempt<i32> = Attempt::failure(Failure::Panicked("earlier".to_string()));
        let mapped = attempt.map(|x| x + 1);
        assert!(matches!(mapped, Attempt::Failure(Failure::Panicked(_))));
    }
}
