//! Stacking readers over other layers
//!
//! Combining [`Reader`](crate::Reader) with [`Maybe`], [`Outcome`] or
//! [`Effect`] by hand means unwrapping two layers at every step. This module
//! provides a single generic adapter instead: the [`Layer`] trait captures
//! what the inner layer must support (`of` / `map` / `and_then`), and
//! [`ReaderT`] lifts those combinators through the reader layer, for any
//! conforming inner layer.
//!
//! The aliases [`ReaderMaybe`], [`ReaderOutcome`] and [`ReaderEffect`] name
//! the stacks that come up in practice.
//!
//! # Examples
//!
//! ```
//! use confluence::stack::ReaderMaybe;
//! use confluence::Maybe;
//!
//! #[derive(Clone)]
//! struct Env {
//!     minimum: i32,
//! }
//!
//! let admitted = ReaderMaybe::asks(|env: &Env| env.minimum)
//!     .and_then(|min| {
//!         ReaderMaybe::new(move |_: &Env| Maybe::from_predicate(min, |m| *m > 0))
//!     });
//!
//! assert_eq!(admitted.run(&Env { minimum: 5 }), Maybe::Present(5));
//! assert_eq!(admitted.run(&Env { minimum: 0 }), Maybe::Absent);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::{Effect, Maybe, Outcome, Reader};

/// Capability contract for a layer that can sit under a reader.
///
/// A `Layer` is a brand for a type constructor: `Wrapped<T>` is the layer
/// applied to `T`, and the three operations are the layer's unit, functor
/// and sequencing combinators. [`ReaderT`] is written once against this
/// contract instead of once per stack.
pub trait Layer {
    /// The layer applied to a value type.
    type Wrapped<T: Send + 'static>: Send + 'static;

    /// Lift a plain value into the layer.
    fn of<T: Send + 'static>(value: T) -> Self::Wrapped<T>;

    /// Transform the wrapped value.
    fn map<T, U, F>(wrapped: Self::Wrapped<T>, f: F) -> Self::Wrapped<U>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static;

    /// Sequence a dependent computation in the layer.
    fn and_then<T, U, F>(wrapped: Self::Wrapped<T>, f: F) -> Self::Wrapped<U>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> Self::Wrapped<U> + Send + 'static;
}

/// [`Layer`] brand for [`Maybe`].
#[derive(Debug, Clone, Copy)]
pub struct MaybeLayer;

impl Layer for MaybeLayer {
    type Wrapped<T: Send + 'static> = Maybe<T>;

    fn of<T: Send + 'static>(value: T) -> Maybe<T> {
        Maybe::present(value)
    }

    fn map<T, U, F>(wrapped: Maybe<T>, f: F) -> Maybe<U>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        wrapped.map(f)
    }

    fn and_then<T, U, F>(wrapped: Maybe<T>, f: F) -> Maybe<U>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> Maybe<U> + Send + 'static,
    {
        wrapped.and_then(f)
    }
}

/// [`Layer`] brand for [`Outcome`] with error type `E`.
pub struct OutcomeLayer<E>(PhantomData<E>);

impl<E> std::fmt::Debug for OutcomeLayer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("OutcomeLayer")
    }
}

impl<E: Send + 'static> Layer for OutcomeLayer<E> {
    type Wrapped<T: Send + 'static> = Outcome<T, E>;

    fn of<T: Send + 'static>(value: T) -> Outcome<T, E> {
        Outcome::success(value)
    }

    fn map<T, U, F>(wrapped: Outcome<T, E>, f: F) -> Outcome<U, E>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        wrapped.map(f)
    }

    fn and_then<T, U, F>(wrapped: Outcome<T, E>, f: F) -> Outcome<U, E>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> Outcome<U, E> + Send + 'static,
    {
        wrapped.and_then(f)
    }
}

/// [`Layer`] brand for [`Effect`] with error type `E`.
pub struct EffectLayer<E>(PhantomData<E>);

impl<E> std::fmt::Debug for EffectLayer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EffectLayer")
    }
}

impl<E: Send + 'static> Layer for EffectLayer<E> {
    type Wrapped<T: Send + 'static> = Effect<T, E>;

    fn of<T: Send + 'static>(value: T) -> Effect<T, E> {
        Effect::pure(value)
    }

    fn map<T, U, F>(wrapped: Effect<T, E>, f: F) -> Effect<U, E>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        wrapped.map(f)
    }

    fn and_then<T, U, F>(wrapped: Effect<T, E>, f: F) -> Effect<U, E>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> Effect<U, E> + Send + 'static,
    {
        wrapped.and_then(f)
    }
}

/// A reader stacked over an inner [`Layer`].
///
/// `ReaderT<Env, L, T>` wraps a re-invocable function
/// `&Env -> L::Wrapped<T>`. Its combinators operate on the innermost value
/// `T` directly, so pipeline stages never unwrap the layers by hand.
pub struct ReaderT<Env, L: Layer, T: Send + 'static> {
    run_fn: Arc<dyn Fn(&Env) -> L::Wrapped<T> + Send + Sync>,
}

impl<Env, L: Layer, T: Send + 'static> Clone for ReaderT<Env, L, T> {
    fn clone(&self) -> Self {
        ReaderT {
            run_fn: Arc::clone(&self.run_fn),
        }
    }
}

impl<Env, L: Layer, T: Send + 'static> std::fmt::Debug for ReaderT<Env, L, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderT")
            .field("run_fn", &"<environment function>")
            .finish()
    }
}

impl<Env, L, T> ReaderT<Env, L, T>
where
    Env: 'static,
    L: Layer,
    T: Send + 'static,
{
    /// Wrap a function from the environment into the inner layer.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Env) -> L::Wrapped<T> + Send + Sync + 'static,
    {
        ReaderT { run_fn: Arc::new(f) }
    }

    /// Lift a plain value into the stack.
    pub fn pure(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        ReaderT::new(move |_| L::of(value.clone()))
    }

    /// Project a value out of the environment, lifted into the inner layer.
    pub fn asks<F>(f: F) -> Self
    where
        F: Fn(&Env) -> T + Send + Sync + 'static,
    {
        ReaderT::new(move |env| L::of(f(env)))
    }

    /// Lift a plain [`Reader`] into the stack.
    pub fn lift(reader: Reader<Env, T>) -> Self {
        ReaderT::new(move |env| L::of(reader.run(env)))
    }

    /// Lift an already-wrapped inner value into the stack.
    ///
    /// The value is cloned per invocation; for single-shot inner layers
    /// (effects) use [`new`](ReaderT::new) to build a fresh one each run.
    pub fn from_inner(wrapped: L::Wrapped<T>) -> Self
    where
        L::Wrapped<T>: Clone + Sync,
    {
        ReaderT::new(move |_| wrapped.clone())
    }

    /// Transform the innermost value.
    pub fn map<U, F>(self, f: F) -> ReaderT<Env, L, U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ReaderT::new(move |env| {
            let f = Arc::clone(&f);
            L::map((*self.run_fn)(env), move |t| (*f)(t))
        })
    }

    /// Sequence a dependent stage.
    ///
    /// The environment is cloned into the continuation so deferred inner
    /// layers can read it after the call returns; every stage still observes
    /// the same environment value.
    pub fn and_then<U, G>(self, g: G) -> ReaderT<Env, L, U>
    where
        U: Send + 'static,
        G: Fn(T) -> ReaderT<Env, L, U> + Send + Sync + 'static,
        Env: Clone + Send + Sync,
    {
        let g = Arc::new(g);
        ReaderT::new(move |env: &Env| {
            let g = Arc::clone(&g);
            let env = env.clone();
            L::and_then((*self.run_fn)(&env), move |t| {
                let next = (*g)(t);
                (*next.run_fn)(&env)
            })
        })
    }

    /// Run against an environment, yielding the inner layer's value.
    pub fn run(&self, env: &Env) -> L::Wrapped<T> {
        (*self.run_fn)(env)
    }
}

/// Reader over [`Maybe`].
pub type ReaderMaybe<Env, T> = ReaderT<Env, MaybeLayer, T>;

/// Reader over [`Outcome`] with error type `E`.
pub type ReaderOutcome<Env, E, T> = ReaderT<Env, OutcomeLayer<E>, T>;

/// Reader over [`Effect`] with error type `E`.
pub type ReaderEffect<Env, E, T> = ReaderT<Env, EffectLayer<E>, T>;
