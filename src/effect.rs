//! Effect type for composing deferred async computations
//!
//! This module provides the `Effect` type: a lazy, composable asynchronous
//! computation. Constructing an effect performs no work - work begins only when
//! the effect is [run](Effect::run). Sequential dependency is expressed with
//! [`and_then`](Effect::and_then); independent effects are started together
//! with [`zip`](Effect::zip) (or the joins in [`crate::par`]) and settle when
//! the last operand settles.
//!
//! Dependency injection lives in [`crate::Reader`]; an `Effect` closes over
//! whatever it needs at construction time.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use confluence::Effect;
//!
//! # tokio_test::block_on(async {
//! let effect = Effect::<_, String>::pure(42);
//! assert_eq!(effect.run().await, Ok(42));
//!
//! let effect = Effect::<i32, _>::fail("error");
//! assert_eq!(effect.run().await, Err("error"));
//! # });
//! ```
//!
//! ## Sequential composition
//!
//! ```
//! use confluence::Effect;
//!
//! # tokio_test::block_on(async {
//! let effect = Effect::<_, String>::pure(5)
//!     .map(|x| x * 2)
//!     .and_then(|x| Effect::pure(x + 10));
//!
//! assert_eq!(effect.run().await, Ok(20));
//! # });
//! ```
//!
//! ## Parallel composition
//!
//! ```
//! use confluence::Effect;
//!
//! # tokio_test::block_on(async {
//! let a = Effect::<_, String>::from_async(|| async { Ok(1) });
//! let b = Effect::<_, String>::from_async(|| async { Ok(2) });
//!
//! // Both are started together; the pair settles when the last one does.
//! assert_eq!(a.zip(b).run().await, Ok((1, 2)));
//! # });
//! ```

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use crate::{Maybe, Outcome};

/// A boxed future that is Send
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Function type for Effect internals
type EffectFn<T, E> = Box<dyn FnOnce() -> BoxFuture<'static, Result<T, E>> + Send>;

/// A deferred async computation that may fail.
///
/// `Effect<T, E>` represents a computation that, once run:
/// - settles to a value of type `T` on success
/// - settles to an error of type `E` on failure
///
/// Effects are lazy and single-shot: no work happens at construction, and
/// running consumes the value. Re-executing a pipeline means re-building it
/// from its (cheap, pure) constructors - effects are never memoized.
///
/// All results flow through the settled return value; concurrently joined
/// effects must not share mutable state as a side channel.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (defaults to [`Infallible`] for
///   effects that cannot fail)
///
/// # Examples
///
/// ```
/// use confluence::Effect;
///
/// # tokio_test::block_on(async {
/// let effect: Effect<_, String> = Effect::pure(42);
/// assert_eq!(effect.run().await, Ok(42));
/// # });
/// ```
pub struct Effect<T, E = Infallible> {
    pub(crate) run_fn: EffectFn<T, E>,
}

// Manual Debug implementation since FnOnce is not Debug
impl<T, E> std::fmt::Debug for Effect<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effect")
            .field("run_fn", &"<deferred>")
            .finish()
    }
}

impl<T, E> Effect<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    pub(crate) fn from_run_fn<F>(f: F) -> Self
    where
        F: FnOnce() -> BoxFuture<'static, Result<T, E>> + Send + 'static,
    {
        Effect {
            run_fn: Box::new(f),
        }
    }

    /// Create an effect that settles immediately to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = Effect::<_, String>::pure(42);
    /// assert_eq!(effect.run().await, Ok(42));
    /// # });
    /// ```
    pub fn pure(value: T) -> Self {
        Effect::from_run_fn(move || Box::pin(async move { Ok(value) }))
    }

    /// Create an effect that settles to a failure.
    pub fn fail(error: E) -> Self {
        Effect::from_run_fn(move || Box::pin(async move { Err(error) }))
    }

    /// Lift a synchronous thunk.
    ///
    /// The thunk runs when the effect is run, not before.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = Effect::from_fn(|| Ok::<_, String>(42));
    /// assert_eq!(effect.run().await, Ok(42));
    /// # });
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
    {
        Effect::from_run_fn(move || {
            let result = f();
            Box::pin(async move { result })
        })
    }

    /// Lift an asynchronous thunk.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = Effect::from_async(|| async { Ok::<_, String>(42) });
    /// assert_eq!(effect.run().await, Ok(42));
    /// # });
    /// ```
    pub fn from_async<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Effect::from_run_fn(move || Box::pin(f()))
    }

    /// Lift an existing future.
    ///
    /// Rust futures are themselves lazy, so the lifted action still starts
    /// only when the effect is run.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Effect::from_run_fn(move || Box::pin(future))
    }

    /// Lift an already-settled `Result`.
    pub fn from_result(result: Result<T, E>) -> Self {
        Effect::from_run_fn(move || Box::pin(async move { result }))
    }

    /// Lift an [`Outcome`] into an effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::{Effect, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let effect = Effect::from_outcome(Outcome::<_, String>::success(42));
    /// assert_eq!(effect.run().await, Ok(42));
    /// # });
    /// ```
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Effect::pure(value),
            Outcome::Failure(error) => Effect::fail(error),
        }
    }

    /// Lift a [`Maybe`], supplying a typed failure for absence.
    pub fn from_maybe<F>(maybe: Maybe<T>, on_absent: F) -> Self
    where
        F: FnOnce() -> E + Send + 'static,
    {
        match maybe {
            Maybe::Present(value) => Effect::pure(value),
            Maybe::Absent => Effect::from_fn(move || Err(on_absent())),
        }
    }

    /// Chain a dependent effect.
    ///
    /// The receiver runs to completion first; its settled value feeds `f`,
    /// and only then does the produced effect begin. On failure, `f` never
    /// runs and the failure propagates unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = Effect::<_, String>::pure(5)
    ///     .and_then(|x| Effect::pure(x * 2));
    /// assert_eq!(effect.run().await, Ok(10));
    /// # });
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Effect<U, E>
    where
        F: FnOnce(T) -> Effect<U, E> + Send + 'static,
        U: Send + 'static,
    {
        Effect::from_run_fn(move || {
            Box::pin(async move {
                let value = (self.run_fn)().await?;
                let next = f(value);
                (next.run_fn)().await
            })
        })
    }

    /// Transform the settled value after the underlying action completes.
    pub fn map<U, F>(self, f: F) -> Effect<U, E>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        Effect::from_run_fn(move || Box::pin(async move { (self.run_fn)().await.map(f) }))
    }

    /// Transform the error value.
    pub fn map_err<E2, F>(self, f: F) -> Effect<T, E2>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        E2: Send + 'static,
    {
        Effect::from_run_fn(move || Box::pin(async move { (self.run_fn)().await.map_err(f) }))
    }

    /// Recover from failure with a lazily constructed fallback effect.
    ///
    /// The recovery function is not invoked when the receiver succeeds.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Effect<T, E> + Send + 'static,
    {
        Effect::from_run_fn(move || {
            Box::pin(async move {
                match (self.run_fn)().await {
                    Ok(value) => Ok(value),
                    Err(error) => {
                        let recovery = f(error);
                        (recovery.run_fn)().await
                    }
                }
            })
        })
    }

    /// Fail with a typed error if the settled value does not satisfy the
    /// predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = Effect::<_, String>::pure(15)
    ///     .check(|age| *age >= 18, || "too young".to_string());
    /// assert_eq!(effect.run().await, Err("too young".to_string()));
    /// # });
    /// ```
    #[inline]
    pub fn check<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        self.and_then(move |value| {
            if predicate(&value) {
                Effect::pure(value)
            } else {
                Effect::fail(on_false())
            }
        })
    }

    /// Run a side effect against the settled value, then pass it through.
    ///
    /// The side effect participates in the pipeline: if it fails, the whole
    /// computation fails.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Effect<(), E> + Send + 'static,
        T: Clone,
    {
        self.and_then(move |value| {
            let keep = value.clone();
            f(&value).map(move |_| keep)
        })
    }

    /// Join with an independent effect, starting both together.
    ///
    /// Neither operand waits for the other to begin; the pair settles once
    /// both have settled, in declaration order regardless of settlement
    /// order. On failure every operand is still awaited, and the first
    /// failure in declaration order is reported. No cancellation of the
    /// sibling.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = Effect::<_, String>::pure(1).zip(Effect::pure(2));
    /// assert_eq!(effect.run().await, Ok((1, 2)));
    /// # });
    /// ```
    pub fn zip<U>(self, other: Effect<U, E>) -> Effect<(T, U), E>
    where
        U: Send + 'static,
    {
        Effect::from_run_fn(move || {
            Box::pin(async move {
                let (a, b) = futures::future::join((self.run_fn)(), (other.run_fn)()).await;
                match (a, b) {
                    (Ok(a), Ok(b)) => Ok((a, b)),
                    (Err(e), _) => Err(e),
                    (_, Err(e)) => Err(e),
                }
            })
        })
    }

    /// Join with an independent effect and combine the results.
    ///
    /// Same execution policy as [`zip`](Effect::zip).
    pub fn zip_with<U, R, F>(self, other: Effect<U, E>, f: F) -> Effect<R, E>
    where
        U: Send + 'static,
        R: Send + 'static,
        F: FnOnce(T, U) -> R + Send + 'static,
    {
        self.zip(other).map(move |(a, b)| f(a, b))
    }

    /// Apply a function-valued effect to an argument effect.
    ///
    /// Both operands run under the parallel-join policy of
    /// [`zip`](Effect::zip).
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let f = Effect::<_, String>::pure(|x: i32| x + 1);
    /// assert_eq!(f.ap(Effect::pure(41)).run().await, Ok(42));
    /// # });
    /// ```
    pub fn ap<A, B>(self, arg: Effect<A, E>) -> Effect<B, E>
    where
        T: FnOnce(A) -> B,
        A: Send + 'static,
        B: Send + 'static,
    {
        self.zip(arg).map(|(f, a)| f(a))
    }

    /// Run the effect to settlement.
    ///
    /// This is the single trigger point: invoking the outermost effect
    /// recursively triggers its parts according to how they were composed.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = Effect::<_, String>::pure(42);
    /// assert_eq!(effect.run().await, Ok(42));
    /// # });
    /// ```
    pub async fn run(self) -> Result<T, E> {
        (self.run_fn)().await
    }
}

impl<T> Effect<T, Infallible>
where
    T: Send + 'static,
{
    /// Run an effect that cannot fail, yielding the value directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = Effect::pure(42);
    /// assert_eq!(effect.run_ok().await, 42);
    /// # });
    /// ```
    pub async fn run_ok(self) -> T {
        match (self.run_fn)().await {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}
