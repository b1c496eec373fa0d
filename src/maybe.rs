//! Maybe type for values that may be absent
//!
//! This module provides the `Maybe` type, a sum type representing the presence
//! or absence of a value. Absence carries no payload and is not an error - it is
//! ordinary data. Use [`crate::Outcome`] when a missing value should carry a
//! typed reason.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use confluence::Maybe;
//!
//! let present = Maybe::present(42);
//! let absent: Maybe<i32> = Maybe::absent();
//!
//! assert!(present.is_present());
//! assert!(absent.is_absent());
//! ```
//!
//! ## Lifting predicates
//!
//! ```
//! use confluence::Maybe;
//!
//! let big = Maybe::from_predicate(15, |n| *n > 10);
//! assert_eq!(big, Maybe::present(15));
//!
//! let small = Maybe::from_predicate(5, |n| *n > 10);
//! assert_eq!(small, Maybe::absent());
//! ```
//!
//! ## Chained pipelines
//!
//! ```
//! use confluence::Maybe;
//!
//! let result = Maybe::present(5)
//!     .map(|x| x * 2)
//!     .and_then(|x| Maybe::from_predicate(x, |n| *n < 100))
//!     .fold(|| "nothing".to_string(), |x| format!("got {}", x));
//!
//! assert_eq!(result, "got 10");
//! ```

/// A value that is either `Present(T)` or `Absent`.
///
/// `Maybe` mirrors `Option` but keeps the combinator vocabulary of this crate
/// (`and_then`, `or_else`, `fold`) and converts losslessly to and from `Option`
/// at the boundary. Absence is data, never a fault: it carries no payload and
/// must not be logged or surfaced as an error.
///
/// # Examples
///
/// ```
/// use confluence::Maybe;
///
/// let bet = Maybe::from_predicate(100, |b| *b > 0)
///     .map(|b| b * 2);
/// assert_eq!(bet, Maybe::present(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A value is present
    Present(T),
    /// No value
    Absent,
}

impl<T> Maybe<T> {
    /// Create a present value.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Maybe;
    ///
    /// let m = Maybe::present(42);
    /// assert!(m.is_present());
    /// ```
    #[inline]
    pub fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Create an absent value.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Maybe;
    ///
    /// let m: Maybe<i32> = Maybe::absent();
    /// assert!(m.is_absent());
    /// ```
    #[inline]
    pub fn absent() -> Self {
        Maybe::Absent
    }

    /// Lift an `Option` into a `Maybe`.
    ///
    /// `None` is the absence sentinel and maps to `Absent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(1)), Maybe::present(1));
    /// assert_eq!(Maybe::from_option(None::<i32>), Maybe::absent());
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }

    /// Test a value against a predicate.
    ///
    /// Returns `Present(value)` when the predicate holds, `Absent` otherwise.
    /// Predicate failure is data, not control flow - nothing is raised.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Maybe;
    ///
    /// assert_eq!(Maybe::from_predicate(15, |n| *n > 10), Maybe::present(15));
    /// assert_eq!(Maybe::from_predicate(5, |n| *n > 10), Maybe::absent());
    /// ```
    #[inline]
    pub fn from_predicate<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Maybe::Present(value)
        } else {
            Maybe::Absent
        }
    }

    /// Check if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Check if the value is absent.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Transform the value if present.
    ///
    /// No-op on `Absent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Maybe;
    ///
    /// assert_eq!(Maybe::present(5).map(|x| x * 2), Maybe::present(10));
    /// assert_eq!(Maybe::<i32>::absent().map(|x| x * 2), Maybe::absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chain a dependent step that may itself lose the value.
    ///
    /// The function must return a `Maybe` - the result is flattened, never
    /// double-wrapped. No-op on `Absent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Maybe;
    ///
    /// let result = Maybe::present(5)
    ///     .and_then(|x| Maybe::from_predicate(x * 2, |n| *n < 100));
    /// assert_eq!(result, Maybe::present(10));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keep the value only if the predicate holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.and_then(|value| Maybe::from_predicate(value, predicate))
    }

    /// Recover from absence with a lazily evaluated fallback.
    ///
    /// The fallback is **not** invoked when the receiver is `Present` - the
    /// short-circuit cost behavior is part of the contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Maybe;
    ///
    /// let mut calls = 0;
    /// let m = Maybe::present(1).or_else(|| {
    ///     calls += 1;
    ///     Maybe::present(2)
    /// });
    /// assert_eq!(m, Maybe::present(1));
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => fallback(),
        }
    }

    /// Eliminate the tag, producing a plain value from either branch.
    ///
    /// This is the sanctioned way to extract a final value. It is total:
    /// exactly one of the two branches runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Maybe;
    ///
    /// let msg = Maybe::present(30)
    ///     .fold(|| "you lose".to_string(), |m| format!("you win {}", m));
    /// assert_eq!(msg, "you win 30");
    /// ```
    #[inline]
    pub fn fold<R, A, P>(self, on_absent: A, on_present: P) -> R
    where
        A: FnOnce() -> R,
        P: FnOnce(T) -> R,
    {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    /// Extract the value or compute a default.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(default, |value| value)
    }

    /// Convert to an `Option`, `Absent` becoming `None`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }

    /// Attach a typed reason to absence, producing an [`crate::Outcome`].
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::{Maybe, Outcome};
    ///
    /// let out = Maybe::<i32>::absent().to_outcome(|| "missing");
    /// assert_eq!(out, Outcome::failure("missing"));
    /// ```
    #[inline]
    pub fn to_outcome<E, F>(self, on_absent: F) -> crate::Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Present(value) => crate::Outcome::Success(value),
            Maybe::Absent => crate::Outcome::Failure(on_absent()),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        Maybe::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
