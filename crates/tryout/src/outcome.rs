// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The two-variant outcome algebra.
//!
//! An [`Outcome<T>`] is either a [`Success`](Outcome::Success) holding a
//! produced value or a [`Failure`](Outcome::Failure) holding a captured
//! [`Fault`]. The set is closed: there is no third variant and no empty
//! state, so matching on an outcome is exhaustive by construction.
//!
//! Failures flow through the success-path combinators (`map`, `flat_map`,
//! `filter`, `or`) untouched, and successes flow through the failure-path
//! combinators (`map_failure`, `recover`, `recover_with`) untouched, until
//! a terminal extraction (`unwrap_or`, `unwrap_or_else`, `into_result`,
//! `fold`, `ok`) leaves the outcome world.
//!
//! The factory [`Outcome::of`] classifies by channel: an `Err` returned by
//! the probe is a recoverable fault and is captured; a panic is a fatal
//! fault and unwinds past the factory untouched. No function of this crate
//! ever calls `catch_unwind`.

use crate::error::PredicateError;
use crate::fault::Fault;
use std::fmt;

/// The outcome of a fallible operation: a produced value or a captured
/// fault.
///
/// Instances are immutable after construction and value-based: equal
/// outcomes are interchangeable, and outcomes must not be used for
/// synchronization.
///
/// # Examples
///
/// ```rust
/// use tryout::fault::Fault;
/// use tryout::outcome::Outcome;
///
/// let outcome = Outcome::success(4)
///     .map(|x| x * 2)
///     .flat_map(|x| {
///         if x == 8 {
///             Outcome::success(x)
///         } else {
///             Outcome::failure(Fault::msg("unexpected"))
///         }
///     });
///
/// assert_eq!(outcome.unwrap_or(-1), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed and the fault was captured.
    Failure(Fault),
}

impl<T> Outcome<T> {
    /// Invokes `probe` exactly once and classifies its outcome: a returned
    /// `Ok` becomes a `Success`, a returned `Err` becomes a `Failure`.
    ///
    /// A panic raised by the probe is a fatal fault and is never captured;
    /// it unwinds past this function unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let success = Outcome::of(|| "10".parse::<i32>());
    /// assert_eq!(success.unwrap_or(0), 10);
    ///
    /// let failure = Outcome::of(|| "ten".parse::<i32>());
    /// assert!(failure.is_failure());
    /// ```
    #[inline]
    pub fn of<E, F>(probe: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Fault>,
    {
        match probe() {
            Ok(value) => Self::Success(value),
            Err(fault) => Self::Failure(fault.into()),
        }
    }

    /// Creates a `Success` holding the given value.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` holding the given fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::fault::Fault;
    /// use tryout::outcome::Outcome;
    ///
    /// let from_fault = Outcome::<i32>::failure(Fault::msg("boom"));
    /// let from_error = Outcome::<i32>::failure("ten".parse::<i32>().unwrap_err());
    ///
    /// assert!(from_fault.is_failure());
    /// assert!(from_error.is_failure());
    /// ```
    #[inline]
    pub fn failure(fault: impl Into<Fault>) -> Self {
        Self::Failure(fault.into())
    }

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Invokes `action` with a reference to the value if this is a
    /// `Success`; does nothing otherwise.
    #[inline]
    pub fn if_success<A>(&self, action: A)
    where
        A: FnOnce(&T),
    {
        if let Self::Success(value) = self {
            action(value);
        }
    }

    /// Invokes `action` with a reference to the fault if this is a
    /// `Failure`; does nothing otherwise.
    #[inline]
    pub fn if_failure<A>(&self, action: A)
    where
        A: FnOnce(&Fault),
    {
        if let Self::Failure(fault) = self {
            action(fault);
        }
    }

    /// Invokes exactly one of the two actions: `action` with the value for
    /// a `Success`, `failure_action` with the fault for a `Failure`.
    #[inline]
    pub fn if_success_or_else<A, B>(&self, action: A, failure_action: B)
    where
        A: FnOnce(&T),
        B: FnOnce(&Fault),
    {
        match self {
            Self::Success(value) => action(value),
            Self::Failure(fault) => failure_action(fault),
        }
    }

    /// Keeps a `Success` whose value matches `predicate`; turns a mismatch
    /// into a `Failure` wrapping a [`PredicateError`] that records the
    /// rejected value. A `Failure` passes through untouched and the
    /// predicate is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// assert!(Outcome::success(5).filter(|v| *v > 0).is_success());
    /// assert!(Outcome::success(-5).filter(|v| *v > 0).is_failure());
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(Fault::new(PredicateError::new(format!("{:?}", value))))
                }
            }
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Eliminates the outcome by applying exactly one of the two functions
    /// and returning its value directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let message = Outcome::success(3).fold(
    ///     |value| format!("got {}", value),
    ///     |fault| format!("failed: {}", fault),
    /// );
    /// assert_eq!(message, "got 3");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Fault) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(fault) => on_failure(fault),
        }
    }

    /// Transforms the value of a `Success`; a `Failure` short-circuits and
    /// the transform is never invoked. A panic raised by the transform
    /// propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let outcome = Outcome::success(4).map(|x| x * 2);
    /// assert_eq!(outcome, Outcome::success(8));
    /// ```
    #[inline]
    pub fn map<R, F>(self, transform: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Transforms the value of a `Success` into a new outcome and returns
    /// that outcome directly, flattening one level. A `Failure`
    /// short-circuits and the transform is never invoked.
    #[inline]
    pub fn flat_map<R, F>(self, transform: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Outcome<R>,
    {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Transforms the fault of a `Failure`; a `Success` passes through
    /// untouched. The dual of [`map`](Self::map) for the failure channel.
    #[inline]
    pub fn map_failure<F>(self, transform: F) -> Self
    where
        F: FnOnce(Fault) -> Fault,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(fault) => Self::Failure(transform(fault)),
        }
    }

    /// Returns this outcome if it is a `Success`; otherwise invokes
    /// `supplier` exactly once and returns its outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::fault::Fault;
    /// use tryout::outcome::Outcome;
    ///
    /// let fallback = Outcome::<i32>::failure(Fault::msg("boom"))
    ///     .or(|| Outcome::success(1));
    /// assert_eq!(fallback, Outcome::success(1));
    /// ```
    #[inline]
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(_) => supplier(),
        }
    }

    /// Returns the value of a `Success`, or the literal default for a
    /// `Failure` (the fault is discarded).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::fault::Fault;
    /// use tryout::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::success(42).unwrap_or(0), 42);
    /// assert_eq!(Outcome::failure(Fault::msg("boom")).unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value of a `Success`, or the result of applying
    /// `transform` to the fault of a `Failure`.
    #[inline]
    pub fn unwrap_or_else<F>(self, transform: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => transform(fault),
        }
    }

    /// Surfaces this outcome into the host's error channel: `Ok(value)` for
    /// a `Success`, `Err(fault)` for a `Failure`. The fault is handed out
    /// unchanged (the same shared object, not a copy) and converts into a
    /// `Box<dyn Error>` on demand via `?` (see
    /// [`Fault::into_error`](crate::fault::Fault::into_error) for the
    /// classification applied at that point).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::error::Error;
    /// use tryout::outcome::Outcome;
    ///
    /// fn line_count(path: &str) -> Result<usize, Box<dyn Error + Send + Sync>> {
    ///     let text = Outcome::of(|| std::fs::read_to_string(path)).into_result()?;
    ///     Ok(text.lines().count())
    /// }
    ///
    /// assert!(line_count("no-such-file").is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(fault) => Err(fault),
        }
    }

    /// Surfaces this outcome into the host's error channel with a
    /// caller-chosen error type: `Ok(value)` for a `Success`,
    /// `Err(transform(fault))` for a `Failure`.
    #[inline]
    pub fn into_result_with<X, F>(self, transform: F) -> Result<T, X>
    where
        F: FnOnce(Fault) -> X,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(fault) => Err(transform(fault)),
        }
    }

    /// Returns the fault of a `Failure`, or `None` for a `Success`. Total,
    /// never fails.
    #[inline]
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Success(_) => None,
            Self::Failure(fault) => Some(fault),
        }
    }

    /// Converts a `Failure` into a `Success` by applying `transform` to the
    /// fault; a `Success` passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::fault::Fault;
    /// use tryout::outcome::Outcome;
    ///
    /// let recovered = Outcome::<i32>::failure(Fault::msg("boom")).recover(|_| 0);
    /// assert_eq!(recovered, Outcome::success(0));
    /// ```
    #[inline]
    pub fn recover<F>(self, transform: F) -> Self
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(fault) => Self::Success(transform(fault)),
        }
    }

    /// Converts a `Failure` into the outcome returned by applying
    /// `transform` to the fault, allowing the recovery itself to fail; a
    /// `Success` passes through untouched. The dual of
    /// [`flat_map`](Self::flat_map) for the failure channel.
    #[inline]
    pub fn recover_with<F>(self, transform: F) -> Self
    where
        F: FnOnce(Fault) -> Self,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(fault) => transform(fault),
        }
    }

    /// Projects this outcome into an `Option`, discarding the fault of a
    /// `Failure`. This projection is deliberately lossy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::fault::Fault;
    /// use tryout::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::success("a").ok(), Some("a"));
    /// assert_eq!(Outcome::<&str>::failure(Fault::msg("boom")).ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Fault>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(fault) => Self::Failure(fault.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Fault> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> fmt::Display for Outcome<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({})", value),
            Self::Failure(fault) => write!(f, "Failure({})", fault),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredicateError;
    use std::cell::Cell;
    use std::num::ParseIntError;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn boom() -> Fault {
        Fault::msg("boom")
    }

    #[test]
    fn test_of_returns_success_when_probe_succeeds() {
        let outcome = Outcome::of(|| "10".parse::<i32>());
        assert_eq!(outcome, Outcome::success(10));
    }

    #[test]
    fn test_of_captures_recoverable_fault() {
        let outcome = Outcome::of(|| "ten".parse::<i32>());
        assert!(outcome.is_failure());
        assert!(
            outcome
                .fault()
                .unwrap()
                .downcast_ref::<ParseIntError>()
                .is_some()
        );
    }

    #[test]
    fn test_of_invokes_probe_exactly_once() {
        let calls = Cell::new(0);
        let outcome = Outcome::of(|| -> Result<i32, Fault> {
            calls.set(calls.get() + 1);
            Ok(1)
        });
        assert_eq!(outcome, Outcome::success(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_of_does_not_capture_fatal_fault() {
        let escaped = catch_unwind(AssertUnwindSafe(|| {
            Outcome::of(|| -> Result<i32, Fault> { panic!("fatal") })
        }));
        assert!(escaped.is_err());
    }

    #[test]
    fn test_predicates_are_mutually_exclusive() {
        let success = Outcome::success(1);
        assert!(success.is_success());
        assert!(!success.is_failure());

        let failure = Outcome::<i32>::failure(boom());
        assert!(!failure.is_success());
        assert!(failure.is_failure());
    }

    #[test]
    fn test_if_success_applies_action_to_value() {
        let seen = Cell::new(0);
        Outcome::success(7).if_success(|v| seen.set(*v));
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_if_success_is_noop_on_failure() {
        let invoked = Cell::new(false);
        Outcome::<i32>::failure(boom()).if_success(|_| invoked.set(true));
        assert!(!invoked.get());
    }

    #[test]
    fn test_if_failure_applies_action_to_fault() {
        let fault = boom();
        let seen = Cell::new(false);
        Outcome::<i32>::failure(fault.clone()).if_failure(|f| seen.set(*f == fault));
        assert!(seen.get());
    }

    #[test]
    fn test_if_failure_is_noop_on_success() {
        let invoked = Cell::new(false);
        Outcome::success(1).if_failure(|_| invoked.set(true));
        assert!(!invoked.get());
    }

    #[test]
    fn test_if_success_or_else_invokes_exactly_one_action() {
        let success_seen = Cell::new(false);
        let failure_seen = Cell::new(false);

        Outcome::success(1).if_success_or_else(
            |_| success_seen.set(true),
            |_| failure_seen.set(true),
        );
        assert!(success_seen.get());
        assert!(!failure_seen.get());

        success_seen.set(false);
        Outcome::<i32>::failure(boom()).if_success_or_else(
            |_| success_seen.set(true),
            |_| failure_seen.set(true),
        );
        assert!(!success_seen.get());
        assert!(failure_seen.get());
    }

    #[test]
    fn test_filter_keeps_matching_success_unchanged() {
        let outcome = Outcome::success(5).filter(|v| *v > 0);
        assert_eq!(outcome, Outcome::success(5));
    }

    #[test]
    fn test_filter_rejects_mismatch_with_predicate_error() {
        let outcome = Outcome::success(-5).filter(|v| *v > 0);

        let error = outcome
            .fault()
            .unwrap()
            .downcast_ref::<PredicateError>()
            .unwrap();
        assert_eq!(error.rejected(), "-5");
    }

    #[test]
    fn test_filter_never_invokes_predicate_on_failure() {
        let fault = boom();
        let outcome = Outcome::<i32>::failure(fault.clone())
            .filter(|_| panic!("predicate must not run"));
        assert_eq!(outcome.fault(), Some(&fault));
    }

    #[test]
    fn test_fold_applies_exactly_one_function() {
        let from_success = Outcome::success(3).fold(|v| v * 2, |_| -1);
        assert_eq!(from_success, 6);

        let from_failure = Outcome::<i32>::failure(boom()).fold(|v| v * 2, |_| -1);
        assert_eq!(from_failure, -1);
    }

    #[test]
    fn test_map_transforms_success_value() {
        let outcome = Outcome::success(4).map(|x| x * 2);
        assert_eq!(outcome, Outcome::success(8));
    }

    #[test]
    fn test_map_short_circuits_on_failure() {
        let fault = boom();
        let outcome = Outcome::<i32>::failure(fault.clone())
            .map(|_| -> i32 { panic!("transform must not run") });
        assert_eq!(outcome, Outcome::failure(fault));
    }

    #[test]
    fn test_map_identity_law() {
        let success = Outcome::success(5);
        assert_eq!(success.clone().map(|x| x), success);

        let failure = Outcome::<i32>::failure(boom());
        assert_eq!(failure.clone().map(|x| x), failure);
    }

    #[test]
    fn test_map_composition_law() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 3;

        let chained = Outcome::success(5).map(f).map(g);
        let composed = Outcome::success(5).map(|x| g(f(x)));
        assert_eq!(chained, composed);

        let failure = Outcome::<i32>::failure(boom());
        assert_eq!(failure.clone().map(f).map(g), failure);
    }

    #[test]
    fn test_flat_map_returns_transform_outcome_directly() {
        let outcome = Outcome::success(4).flat_map(|x| Outcome::success(x + 1));
        assert_eq!(outcome, Outcome::success(5));

        let fault = boom();
        let outcome = Outcome::success(4).flat_map(|_| Outcome::<i32>::failure(fault.clone()));
        assert_eq!(outcome, Outcome::failure(fault));
    }

    #[test]
    fn test_flat_map_short_circuits_on_failure() {
        let fault = boom();
        let outcome = Outcome::<i32>::failure(fault.clone())
            .flat_map(|_| -> Outcome<i32> { panic!("transform must not run") });
        assert_eq!(outcome, Outcome::failure(fault));
    }

    #[test]
    fn test_map_failure_transforms_fault() {
        let replacement = boom();
        let outcome = Outcome::<i32>::failure(Fault::msg("original"))
            .map_failure(|_| replacement.clone());
        assert_eq!(outcome.fault(), Some(&replacement));
    }

    #[test]
    fn test_map_failure_leaves_success_untouched() {
        let outcome =
            Outcome::success(1).map_failure(|_| -> Fault { panic!("transform must not run") });
        assert_eq!(outcome, Outcome::success(1));
    }

    #[test]
    fn test_or_short_circuits_on_success() {
        let outcome = Outcome::success(1).or(|| panic!("supplier must not run"));
        assert_eq!(outcome, Outcome::success(1));
    }

    #[test]
    fn test_or_invokes_supplier_exactly_once_on_failure() {
        let calls = Cell::new(0);
        let outcome = Outcome::<i32>::failure(boom()).or(|| {
            calls.set(calls.get() + 1);
            Outcome::success(1)
        });
        assert_eq!(outcome, Outcome::success(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unwrap_or_returns_value_or_default() {
        assert_eq!(Outcome::success(42).unwrap_or(0), 42);
        assert_eq!(Outcome::<i32>::failure(boom()).unwrap_or(0), 0);
    }

    #[test]
    fn test_unwrap_or_else_applies_transform_to_fault() {
        assert_eq!(Outcome::success(42).unwrap_or_else(|_| 0), 42);

        let recovered =
            Outcome::<usize>::failure(boom()).unwrap_or_else(|fault| fault.to_string().len());
        assert_eq!(recovered, 4);
    }

    #[test]
    fn test_into_result_surfaces_identical_fault() {
        assert_eq!(Outcome::success(1).into_result(), Ok(1));

        let fault = boom();
        let surfaced = Outcome::<i32>::failure(fault.clone())
            .into_result()
            .unwrap_err();
        // Identity, not a copy.
        assert_eq!(surfaced, fault);
    }

    #[test]
    fn test_into_result_propagates_through_question_mark() {
        fn run(text: &str) -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
            let value = Outcome::of(|| text.parse::<i32>()).into_result()?;
            Ok(value)
        }

        assert_eq!(run("3").unwrap(), 3);
        assert!(run("three").is_err());
    }

    #[test]
    fn test_into_result_with_maps_fault() {
        let mapped = Outcome::<i32>::failure(boom())
            .into_result_with(|fault| fault.to_string())
            .unwrap_err();
        assert_eq!(mapped, "boom");

        let untouched = Outcome::success(1)
            .into_result_with(|_| -> String { panic!("transform must not run") });
        assert_eq!(untouched, Ok(1));
    }

    #[test]
    fn test_fault_accessor_is_total() {
        assert_eq!(Outcome::success(1).fault(), None);

        let fault = boom();
        assert_eq!(Outcome::<i32>::failure(fault.clone()).fault(), Some(&fault));
    }

    #[test]
    fn test_recover_inverts_failure() {
        let fault = boom();
        let recovered =
            Outcome::<String>::failure(fault.clone()).recover(|f| f.to_string());
        assert_eq!(recovered, Outcome::success(fault.to_string()));
    }

    #[test]
    fn test_recover_leaves_success_untouched() {
        let outcome = Outcome::success(1).recover(|_| panic!("transform must not run"));
        assert_eq!(outcome, Outcome::success(1));
    }

    #[test]
    fn test_recover_with_allows_recovery_to_fail() {
        let replacement = boom();
        let outcome = Outcome::<i32>::failure(Fault::msg("original"))
            .recover_with(|_| Outcome::failure(replacement.clone()));
        assert_eq!(outcome.fault(), Some(&replacement));

        let recovered =
            Outcome::<i32>::failure(boom()).recover_with(|_| Outcome::success(0));
        assert_eq!(recovered, Outcome::success(0));
    }

    #[test]
    fn test_ok_is_a_lossy_projection() {
        assert_eq!(Outcome::success("a").ok(), Some("a"));
        assert_eq!(Outcome::<&str>::failure(boom()).ok(), None);
    }

    #[test]
    fn test_equality_is_structural_per_variant() {
        assert_eq!(Outcome::success("x"), Outcome::success("x"));
        assert_ne!(Outcome::success("x"), Outcome::success("y"));

        let fault = boom();
        assert_eq!(
            Outcome::<&str>::failure(fault.clone()),
            Outcome::<&str>::failure(fault.clone())
        );
        assert_ne!(
            Outcome::<&str>::failure(boom()),
            Outcome::<&str>::failure(boom())
        );

        // The variants are never equal to each other.
        assert_ne!(Outcome::success("x"), Outcome::failure(fault));
    }

    #[test]
    fn test_display_uses_contained_representation() {
        assert_eq!(format!("{}", Outcome::success(5)), "Success(5)");
        assert_eq!(
            format!("{}", Outcome::<i32>::failure(boom())),
            "Failure(boom)"
        );
    }

    #[test]
    fn test_chained_scenario() {
        let value = Outcome::success(4)
            .map(|x| x * 2)
            .flat_map(|x| {
                if x == 8 {
                    Outcome::success(x)
                } else {
                    Outcome::failure(boom())
                }
            })
            .unwrap_or(-1);
        assert_eq!(value, 8);
    }

    #[test]
    fn test_result_conversions() {
        let from_ok: Outcome<i32> = Ok::<i32, Fault>(1).into();
        assert_eq!(from_ok, Outcome::success(1));

        let from_err: Outcome<i32> = "ten".parse::<i32>().map_err(Fault::new).into();
        assert!(from_err.is_failure());

        let back: Result<i32, Fault> = Outcome::success(1).into();
        assert_eq!(back, Ok(1));
    }

    #[test]
    fn test_outcome_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Outcome<i32>>();
    }
}
