//! Testing utilities
//!
//! Helpers for exercising confluence pipelines in tests: a composable mock
//! environment builder for [`Reader`](crate::Reader)-based code, assertion
//! macros for [`Maybe`] and [`Outcome`], and (behind the `proptest` feature)
//! `Arbitrary` instances for property-based tests.
//!
//! # Examples
//!
//! ## MockEnv builder
//!
//! ```rust
//! use confluence::testing::MockEnv;
//!
//! struct Quotes {
//!     lines: Vec<String>,
//! }
//!
//! let env = MockEnv::new()
//!     .with(|| Quotes { lines: vec!["fixed".to_string()] })
//!     .build();
//!
//! let (_, quotes) = env;
//! assert_eq!(quotes.lines.len(), 1);
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use confluence::{Outcome, assert_success, assert_failure};
//!
//! let ok = Outcome::<_, String>::success(42);
//! assert_success!(ok);
//!
//! let bad = Outcome::<i32, _>::failure("error".to_string());
//! assert_failure!(bad);
//! ```

#[cfg(feature = "proptest")]
use crate::{Maybe, Outcome};

/// Builder for layered test environments.
///
/// Starts empty; each `with()` call nests one more component, so the built
/// value is a left-nested tuple. Reader pipelines written against a single
/// component reach into it with a [`local`](crate::Reader::local) adapter,
/// which keeps test doubles swappable per test.
///
/// # Example
///
/// ```rust
/// use confluence::testing::MockEnv;
///
/// struct Clock {
///     now: u64,
/// }
///
/// struct Limits {
///     max_items: usize,
/// }
///
/// let env = MockEnv::new()
///     .with(|| Clock { now: 1_700_000_000 })
///     .with(|| Limits { max_items: 10 })
///     .build();
///
/// // Built shape: (((), Clock), Limits)
/// let ((_, clock), limits) = env;
/// assert_eq!(clock.now, 1_700_000_000);
/// assert_eq!(limits.max_items, 10);
/// ```
#[derive(Debug)]
pub struct MockEnv<Layers> {
    layers: Layers,
}

impl MockEnv<()> {
    /// Start with no components.
    pub fn new() -> Self {
        Self { layers: () }
    }
}

impl Default for MockEnv<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Layers> MockEnv<Layers> {
    /// Nest one more component, constructed lazily by `f`.
    pub fn with<F, T>(self, f: F) -> MockEnv<(Layers, T)>
    where
        F: FnOnce() -> T,
    {
        MockEnv {
            layers: (self.layers, f()),
        }
    }

    /// Finish, yielding the nested environment tuple.
    pub fn build(self) -> Layers {
        self.layers
    }
}

/// Assert that an [`Outcome`](crate::Outcome) is a `Success`.
///
/// # Example
///
/// ```rust
/// use confluence::{Outcome, assert_success};
///
/// let outcome = Outcome::<_, String>::success(42);
/// assert_success!(outcome);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(_) => {}
            $crate::Outcome::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an [`Outcome`](crate::Outcome) is a `Failure`.
///
/// # Example
///
/// ```rust
/// use confluence::{Outcome, assert_failure};
///
/// let outcome = Outcome::<i32, _>::failure("error");
/// assert_failure!(outcome);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(_) => {}
            $crate::Outcome::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a [`Maybe`](crate::Maybe) is `Present`.
///
/// # Example
///
/// ```rust
/// use confluence::{Maybe, assert_present};
///
/// assert_present!(Maybe::present(1));
/// ```
#[macro_export]
macro_rules! assert_present {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Present(_) => {}
            $crate::Maybe::Absent => {
                panic!("Expected Present, got Absent");
            }
        }
    };
}

/// Assert that a [`Maybe`](crate::Maybe) is `Absent`.
///
/// # Example
///
/// ```rust
/// use confluence::{Maybe, assert_absent};
///
/// assert_absent!(Maybe::<i32>::absent());
/// ```
#[macro_export]
macro_rules! assert_absent {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Absent => {}
            $crate::Maybe::Present(v) => {
                panic!("Expected Absent, got Present: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(Maybe::present),
            Just(Maybe::Absent),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Outcome<T, E>
where
    T: Arbitrary,
    E: Arbitrary,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::success),
            any_with::<E>(e_params).prop_map(Outcome::failure),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Maybe, Outcome};

    #[test]
    fn mock_env_empty() {
        let env = MockEnv::new().build();
        assert_eq!(env, ());
    }

    #[test]
    fn mock_env_layers_components() {
        let env = MockEnv::new()
            .with(|| "hello")
            .with(|| 42)
            .with(|| true)
            .build();

        let (((_, s), n), b) = env;
        assert_eq!(s, "hello");
        assert_eq!(n, 42);
        assert!(b);
    }

    #[test]
    fn assert_success_macro() {
        let outcome = Outcome::<_, String>::success(42);
        assert_success!(outcome);
    }

    #[test]
    fn assert_failure_macro() {
        let outcome = Outcome::<i32, _>::failure("error");
        assert_failure!(outcome);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let outcome = Outcome::<i32, _>::failure("error");
        assert_success!(outcome);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let outcome = Outcome::<_, String>::success(42);
        assert_failure!(outcome);
    }

    #[test]
    fn assert_present_and_absent_macros() {
        assert_present!(Maybe::present(1));
        assert_absent!(Maybe::<i32>::absent());
    }

    #[test]
    #[should_panic(expected = "Expected Present, got Absent")]
    fn assert_present_panics_on_absent() {
        assert_present!(Maybe::<i32>::absent());
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outcome_arbitrary_is_exactly_one_variant(
                outcome in any::<Outcome<i32, String>>()
            ) {
                assert_ne!(outcome.is_success(), outcome.is_failure());
            }

            #[test]
            fn maybe_arbitrary_is_exactly_one_variant(
                maybe in any::<Maybe<i32>>()
            ) {
                assert_ne!(maybe.is_present(), maybe.is_absent());
            }
        }
    }
}
