//! Tracing instrumentation for effects
//!
//! Available with the `tracing` feature. [`EffectTracingExt::instrument`]
//! attaches a caller-supplied [`tracing::Span`] to an effect, entering it for
//! the duration of the effect's execution. Construction stays silent; the
//! span only becomes active once the effect runs.
//!
//! # Examples
//!
//! ```
//! use confluence::Effect;
//! use confluence::trace::EffectTracingExt;
//!
//! # tokio_test::block_on(async {
//! let effect = Effect::<_, String>::pure(42)
//!     .instrument(tracing::info_span!("answer_lookup"));
//!
//! assert_eq!(effect.run().await, Ok(42));
//! # });
//! ```

use tracing::{Instrument, Span};

use crate::Effect;

/// Extension trait attaching spans to effects.
pub trait EffectTracingExt<T, E> {
    /// Run the effect inside `span`.
    fn instrument(self, span: Span) -> Effect<T, E>;
}

impl<T, E> EffectTracingExt<T, E> for Effect<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn instrument(self, span: Span) -> Effect<T, E> {
        Effect::from_run_fn(move || Box::pin((self.run_fn)().instrument(span)))
    }
}
