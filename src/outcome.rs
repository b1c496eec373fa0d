//! Outcome type for fallible steps with typed failures
//!
//! This module provides the `Outcome` type: a sum type carrying either a
//! success value or a caller-defined failure payload. Unlike
//! error-accumulating validation types, `Outcome` composition is strictly
//! **first-failure-wins**: once a pipeline stage yields `Failure`, every later
//! `map`/`and_then` is a no-op that propagates the same failure unchanged, and
//! joining independent outcomes reports the first failure in declaration
//! order.
//!
//! # Examples
//!
//! ## Short-circuiting pipelines
//!
//! ```
//! use confluence::Outcome;
//!
//! fn check_positive(n: i32) -> Outcome<i32, String> {
//!     Outcome::from_predicate(n, |n| *n > 0, || "not positive".to_string())
//! }
//!
//! let result = check_positive(5)
//!     .map(|n| n * 2)
//!     .and_then(check_positive);
//! assert_eq!(result, Outcome::success(10));
//!
//! let result = check_positive(-1).map(|n| n * 2);
//! assert_eq!(result, Outcome::failure("not positive".to_string()));
//! ```
//!
//! ## Joining independent checks
//!
//! ```
//! use confluence::{Outcome, outcome::AllOutcomes};
//!
//! let joined = (
//!     Outcome::<_, String>::success("name"),
//!     Outcome::<_, String>::success(34),
//!     Outcome::<_, String>::success(true),
//! ).all_outcomes();
//!
//! assert_eq!(joined, Outcome::success(("name", 34, true)));
//! ```

/// A computation result that is either `Success(T)` or `Failure(E)`.
///
/// The failure payload `E` describes an *expected* domain failure - a failed
/// validation, a failed external call converted at a [`Outcome::try_catch`]
/// boundary. Anything raised outside such a boundary (a panic) is an
/// unrecoverable fault and is deliberately not caught here.
///
/// # First-failure semantics
///
/// Sequential composition (`and_then`, `map`) short-circuits at the first
/// failure. Independent composition ([`Outcome::ap`], [`Outcome::zip`],
/// [`AllOutcomes`]) never accumulates errors: the first failure in
/// left-to-right declaration order wins.
///
/// # Examples
///
/// ```
/// use confluence::Outcome;
///
/// let ok: Outcome<i32, String> = Outcome::success(42);
/// assert_eq!(ok.map(|n| n + 1), Outcome::success(43));
///
/// let err: Outcome<i32, String> = Outcome::failure("boom".to_string());
/// assert_eq!(err.map(|n| n + 1), Outcome::failure("boom".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The step succeeded with a value
    Success(T),
    /// The step failed with a typed payload
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Create a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome.
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Lift a `Result` into an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Outcome;
    ///
    /// assert_eq!(Outcome::from_result(Ok::<_, String>(1)), Outcome::success(1));
    /// assert_eq!(
    ///     Outcome::from_result(Err::<i32, _>("e")),
    ///     Outcome::failure("e")
    /// );
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    /// Convert into a `Result`, for interop with `?` call sites.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Test a value against a predicate, producing a typed failure when it
    /// does not hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Outcome;
    ///
    /// let ok = Outcome::from_predicate(25, |age| *age >= 18, || "too young");
    /// assert_eq!(ok, Outcome::success(25));
    ///
    /// let err = Outcome::from_predicate(15, |age| *age >= 18, || "too young");
    /// assert_eq!(err, Outcome::failure("too young"));
    /// ```
    #[inline]
    pub fn from_predicate<P, F>(value: T, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
    {
        if predicate(&value) {
            Outcome::Success(value)
        } else {
            Outcome::Failure(on_false())
        }
    }

    /// Run a fallible thunk, converting its raised fault into a `Failure`.
    ///
    /// The thunk's `Err` payload is the fault; `on_err` maps it into the
    /// pipeline's failure type. A normal return becomes `Success`. Panics are
    /// *not* caught - only this explicit boundary converts faults.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Outcome;
    ///
    /// let ok = Outcome::try_catch(|| Ok::<_, String>(42), |e| e);
    /// assert_eq!(ok, Outcome::success(42));
    ///
    /// let err = Outcome::try_catch(|| Err::<i32, _>("boom".to_string()), |e| e);
    /// assert_eq!(err, Outcome::failure("boom".to_string()));
    /// ```
    #[inline]
    pub fn try_catch<F, G, Fault>(thunk: F, on_err: G) -> Self
    where
        F: FnOnce() -> Result<T, Fault>,
        G: FnOnce(Fault) -> E,
    {
        match thunk() {
            Ok(value) => Outcome::Success(value),
            Err(fault) => Outcome::Failure(on_err(fault)),
        }
    }

    /// Check if the outcome is a success.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Check if the outcome is a failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Transform the success value. No-op on `Failure`.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the failure payload only.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Outcome;
    ///
    /// let err: Outcome<i32, _> = Outcome::failure("timeout");
    /// assert_eq!(
    ///     err.map_err(|e| format!("fetch failed: {}", e)),
    ///     Outcome::failure("fetch failed: timeout".to_string())
    /// );
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chain a dependent fallible step.
    ///
    /// Once `Failure`, every later `and_then` in the pipeline propagates the
    /// same failure unchanged and its function body never runs.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recover from failure with a lazily evaluated fallback.
    ///
    /// The fallback is not invoked when the receiver is `Success`.
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce(E) -> Outcome<T, E>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => fallback(error),
        }
    }

    /// Apply an outcome-wrapped function to an outcome-wrapped argument.
    ///
    /// Both operands are already-constructed data; the first failure in
    /// left-to-right order (function, then argument) wins. No accumulation.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Outcome;
    ///
    /// let f: Outcome<_, String> = Outcome::success(|x: i32| x + 1);
    /// assert_eq!(f.ap(Outcome::success(41)), Outcome::success(42));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, arg: Outcome<A, E>) -> Outcome<B, E>
    where
        T: FnOnce(A) -> B,
    {
        match (self, arg) {
            (Outcome::Success(f), Outcome::Success(a)) => Outcome::Success(f(a)),
            (Outcome::Failure(e), _) => Outcome::Failure(e),
            (_, Outcome::Failure(e)) => Outcome::Failure(e),
        }
    }

    /// Join two independent outcomes into a pair, first failure wins.
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success((a, b)),
            (Outcome::Failure(e), _) => Outcome::Failure(e),
            (_, Outcome::Failure(e)) => Outcome::Failure(e),
        }
    }

    /// Eliminate the tag, producing a plain value from either branch.
    ///
    /// The sole sanctioned elimination form: composed pipeline code never
    /// needs a fault-catching construct to handle an expected failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Outcome;
    ///
    /// let msg = Outcome::<i32, String>::failure("no".to_string())
    ///     .fold(|e| format!("failed: {}", e), |v| format!("got {}", v));
    /// assert_eq!(msg, "failed: no");
    /// ```
    #[inline]
    pub fn fold<R, FE, FT>(self, on_failure: FE, on_success: FT) -> R
    where
        FE: FnOnce(E) -> R,
        FT: FnOnce(T) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Drop the failure payload, keeping only presence information.
    #[inline]
    pub fn to_maybe(self) -> crate::Maybe<T> {
        match self {
            Outcome::Success(value) => crate::Maybe::Present(value),
            Outcome::Failure(_) => crate::Maybe::Absent,
        }
    }

    /// Join a tuple of independent outcomes, first failure by position.
    ///
    /// This is the record-composition form: join the tuple, then `map` it
    /// into a named struct.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Outcome;
    ///
    /// let joined = Outcome::<(), ()>::all((
    ///     Outcome::<_, String>::success(1),
    ///     Outcome::<_, String>::success("two"),
    /// ));
    /// assert_eq!(joined, Outcome::success((1, "two")));
    /// ```
    pub fn all<V, E2>(outcomes: V) -> Outcome<V::Output, E2>
    where
        V: AllOutcomes<E2>,
    {
        outcomes.all_outcomes()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Trait for joining a tuple of independent outcomes.
///
/// Implemented for tuples up to size 8. The first `Failure` in positional
/// order wins; later operands are dropped unobserved.
pub trait AllOutcomes<E> {
    /// The tuple of success values when every operand succeeds.
    type Output;

    /// Join the operands, first failure by position.
    fn all_outcomes(self) -> Outcome<Self::Output, E>;
}

macro_rules! impl_all_outcomes {
    ($($T:ident),+) => {
        impl<E, $($T),+> AllOutcomes<E> for ($(Outcome<$T, E>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn all_outcomes(self) -> Outcome<Self::Output, E> {
                let ($($T,)+) = self;
                $(
                    let $T = match $T {
                        Outcome::Success(value) => value,
                        Outcome::Failure(error) => return Outcome::Failure(error),
                    };
                )+
                Outcome::Success(($($T,)+))
            }
        }
    };
}

impl_all_outcomes!(T1);
impl_all_outcomes!(T1, T2);
impl_all_outcomes!(T1, T2, T3);
impl_all_outcomes!(T1, T2, T3, T4);
impl_all_outcomes!(T1, T2, T3, T4, T5);
impl_all_outcomes!(T1, T2, T3, T4, T5, T6);
impl_all_outcomes!(T1, T2, T3, T4, T5, T6, T7);
impl_all_outcomes!(T1, T2, T3, T4, T5, T6, T7, T8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_catch_success() {
        let out = Outcome::try_catch(|| Ok::<_, String>(42), |e| e);
        assert_eq!(out, Outcome::success(42));
    }

    #[test]
    fn test_try_catch_converts_fault() {
        let out = Outcome::try_catch(|| Err::<i32, _>("boom"), |e| e);
        assert_eq!(out, Outcome::failure("boom"));
    }

    #[test]
    fn test_from_predicate() {
        assert_eq!(
            Outcome::from_predicate(25, |n| *n >= 18, || "too young"),
            Outcome::success(25)
        );
        assert_eq!(
            Outcome::from_predicate(15, |n| *n >= 18, || "too young"),
            Outcome::failure("too young")
        );
    }

    #[test]
    fn test_short_circuit_skips_later_stages() {
        let mut calls = 0;
        let out = Outcome::<i32, &str>::failure("e")
            .and_then(|x| {
                calls += 1;
                Outcome::success(x + 1)
            })
            .map(|x| x * 2);
        assert_eq!(out, Outcome::failure("e"));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_failure_propagates_unchanged_through_chain() {
        let out = Outcome::<i32, &str>::failure("original")
            .and_then(|x| Outcome::<i32, &str>::success(x))
            .and_then(|x| Outcome::<i32, &str>::failure("replaced").map(|_: i32| x));
        assert_eq!(out, Outcome::failure("original"));
    }

    #[test]
    fn test_or_else_lazy_on_success() {
        let mut calls = 0;
        let out = Outcome::<_, &str>::success(1).or_else(|_| {
            calls += 1;
            Outcome::success(2)
        });
        assert_eq!(out, Outcome::success(1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_map_err_only_touches_failure() {
        assert_eq!(
            Outcome::<_, i32>::success(1).map_err(|e| e + 1),
            Outcome::success(1)
        );
        assert_eq!(
            Outcome::<i32, _>::failure(1).map_err(|e| e + 1),
            Outcome::failure(2)
        );
    }

    #[test]
    fn test_ap_first_failure_wins() {
        let f: Outcome<fn(i32) -> i32, &str> = Outcome::failure("fn side");
        let a: Outcome<i32, &str> = Outcome::failure("arg side");
        assert_eq!(f.ap(a), Outcome::failure("fn side"));
    }

    #[test]
    fn test_ap_applies() {
        let f: Outcome<_, &str> = Outcome::success(|x: i32| x * 3);
        assert_eq!(f.ap(Outcome::success(4)), Outcome::success(12));
    }

    #[test]
    fn test_zip_first_failure_wins() {
        let a = Outcome::<i32, &str>::failure("first");
        let b = Outcome::<i32, &str>::failure("second");
        assert_eq!(a.zip(b), Outcome::failure("first"));
    }

    #[test]
    fn test_all_success_preserves_positions() {
        let joined = Outcome::<(), ()>::all((
            Outcome::<_, String>::success(1),
            Outcome::<_, String>::success("two"),
            Outcome::<_, String>::success(3.0),
        ));
        assert_eq!(joined, Outcome::success((1, "two", 3.0)));
    }

    #[test]
    fn test_all_reports_first_failure_by_position() {
        let joined = Outcome::<(), ()>::all((
            Outcome::<i32, _>::success(1),
            Outcome::<i32, _>::failure("second"),
            Outcome::<i32, _>::failure("third"),
        ));
        assert_eq!(joined, Outcome::failure("second"));
    }

    #[test]
    fn test_fold_is_total() {
        assert_eq!(Outcome::<i32, &str>::success(1).fold(|_| 0, |v| v), 1);
        assert_eq!(Outcome::<i32, &str>::failure("e").fold(|_| 0, |v| v), 0);
    }

    #[test]
    fn test_monad_laws_on_values() {
        let f = |x: i32| Outcome::<i32, String>::success(x * 2);
        assert_eq!(Outcome::success(3).and_then(f), f(3));

        let m = Outcome::<i32, String>::success(3);
        assert_eq!(m.clone().and_then(Outcome::success), m);
    }

    #[test]
    fn test_result_interop() {
        let out: Outcome<i32, String> = Ok(1).into();
        assert_eq!(out, Outcome::success(1));
        let res: Result<i32, String> = Outcome::success(1).into();
        assert_eq!(res, Ok(1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_both_variants() {
        let ok: Outcome<i32, String> = Outcome::success(5);
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(serde_json::from_str::<Outcome<i32, String>>(&json).unwrap(), ok);

        let err: Outcome<i32, String> = Outcome::failure("boom".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            serde_json::from_str::<Outcome<i32, String>>(&json).unwrap(),
            err
        );
    }
}
