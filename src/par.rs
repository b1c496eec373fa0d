//! Parallel join combinators for effects
//!
//! Everything in this module starts its operands together and waits for all
//! of them to settle. Results come back in declaration order regardless of
//! settlement order, and when several operands fail, the reported failure is
//! the first one in declaration order. Siblings of a failed operand are never
//! cancelled.
//!
//! Sequential dependency stays on [`Effect::and_then`]; [`traverse_seq`] is
//! the strictly-sequential bulk counterpart of [`traverse`] for when each
//! element must finish before the next begins.
//!
//! # Examples
//!
//! ```
//! use confluence::{par, Effect};
//!
//! # tokio_test::block_on(async {
//! let joined = par::join3(
//!     Effect::<_, String>::pure(1),
//!     Effect::pure("two"),
//!     Effect::pure(3.0),
//! );
//! assert_eq!(joined.run().await, Ok((1, "two", 3.0)));
//! # });
//! ```

use futures::stream::{self, StreamExt};

use crate::Effect;

/// Join two independent effects into a pair.
///
/// Free-function form of [`Effect::zip`], for symmetry with the wider joins.
#[inline]
pub fn join2<A, B, E>(a: Effect<A, E>, b: Effect<B, E>) -> Effect<(A, B), E>
where
    A: Send + 'static,
    B: Send + 'static,
    E: Send + 'static,
{
    a.zip(b)
}

/// Join three independent effects into a triple.
///
/// All three are started together; the triple settles when the last one does.
pub fn join3<A, B, C, E>(
    a: Effect<A, E>,
    b: Effect<B, E>,
    c: Effect<C, E>,
) -> Effect<(A, B, C), E>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    E: Send + 'static,
{
    Effect::from_run_fn(move || {
        Box::pin(async move {
            let (a, b, c) =
                futures::future::join3((a.run_fn)(), (b.run_fn)(), (c.run_fn)()).await;
            Ok((a?, b?, c?))
        })
    })
}

/// Join four independent effects.
pub fn join4<A, B, C, D, E>(
    a: Effect<A, E>,
    b: Effect<B, E>,
    c: Effect<C, E>,
    d: Effect<D, E>,
) -> Effect<(A, B, C, D), E>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: Send + 'static,
    E: Send + 'static,
{
    Effect::from_run_fn(move || {
        Box::pin(async move {
            let (a, b, c, d) =
                futures::future::join4((a.run_fn)(), (b.run_fn)(), (c.run_fn)(), (d.run_fn)())
                    .await;
            Ok((a?, b?, c?, d?))
        })
    })
}

/// Join five independent effects.
pub fn join5<A, B, C, D, F, E>(
    a: Effect<A, E>,
    b: Effect<B, E>,
    c: Effect<C, E>,
    d: Effect<D, E>,
    f: Effect<F, E>,
) -> Effect<(A, B, C, D, F), E>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: Send + 'static,
    F: Send + 'static,
    E: Send + 'static,
{
    Effect::from_run_fn(move || {
        Box::pin(async move {
            let (a, b, c, d, f) = futures::future::join5(
                (a.run_fn)(),
                (b.run_fn)(),
                (c.run_fn)(),
                (d.run_fn)(),
                (f.run_fn)(),
            )
            .await;
            Ok((a?, b?, c?, d?, f?))
        })
    })
}

/// Run a batch of homogeneous effects concurrently, collecting their values
/// in input order.
///
/// Concurrency is unbounded; use [`traverse_limit`] to cap it.
///
/// # Examples
///
/// ```
/// use confluence::{par, Effect};
///
/// # tokio_test::block_on(async {
/// let effects = vec![
///     Effect::<_, String>::pure(1),
///     Effect::pure(2),
///     Effect::pure(3),
/// ];
/// assert_eq!(par::sequence(effects).run().await, Ok(vec![1, 2, 3]));
/// # });
/// ```
pub fn sequence<T, E>(effects: Vec<Effect<T, E>>) -> Effect<Vec<T>, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    Effect::from_run_fn(move || {
        Box::pin(async move {
            let futures: Vec<_> = effects.into_iter().map(|e| (e.run_fn)()).collect();
            let results = futures::future::join_all(futures).await;
            results.into_iter().collect()
        })
    })
}

/// Build an effect per item and run them all concurrently.
///
/// Effects are built eagerly (construction is pure and cheap); execution
/// remains deferred until the returned effect is run. Results keep the
/// items' order.
///
/// # Examples
///
/// ```
/// use confluence::{par, Effect};
///
/// # tokio_test::block_on(async {
/// let doubled = par::traverse(vec![1, 2, 3], |x| Effect::<_, String>::pure(x * 2));
/// assert_eq!(doubled.run().await, Ok(vec![2, 4, 6]));
/// # });
/// ```
pub fn traverse<I, A, T, E, F>(items: I, f: F) -> Effect<Vec<T>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Effect<T, E>,
    T: Send + 'static,
    E: Send + 'static,
{
    sequence(items.into_iter().map(f).collect())
}

/// [`traverse`] with an explicit concurrency ceiling.
///
/// At most `limit` effects are in flight at once; results still come back in
/// input order.
///
/// # Panics
///
/// Panics if `limit` is zero.
pub fn traverse_limit<I, A, T, E, F>(items: I, limit: usize, f: F) -> Effect<Vec<T>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Effect<T, E>,
    T: Send + 'static,
    E: Send + 'static,
{
    assert!(limit > 0, "concurrency limit must be at least 1");
    let effects: Vec<Effect<T, E>> = items.into_iter().map(f).collect();
    Effect::from_run_fn(move || {
        Box::pin(async move {
            let results: Vec<Result<T, E>> = stream::iter(effects)
                .map(|effect| (effect.run_fn)())
                .buffered(limit)
                .collect()
                .await;
            results.into_iter().collect()
        })
    })
}

/// Build an effect per item and run them strictly one after another.
///
/// Each effect starts only after the previous one settled successfully; the
/// first failure stops the batch and the remaining effects never run.
pub fn traverse_seq<I, A, T, E, F>(items: I, f: F) -> Effect<Vec<T>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Effect<T, E>,
    T: Send + 'static,
    E: Send + 'static,
{
    let effects: Vec<Effect<T, E>> = items.into_iter().map(f).collect();
    Effect::from_run_fn(move || {
        Box::pin(async move {
            let mut values = Vec::with_capacity(effects.len());
            for effect in effects {
                values.push((effect.run_fn)().await?);
            }
            Ok(values)
        })
    })
}
