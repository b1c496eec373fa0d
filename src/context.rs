//! Error trails for propagating failures
//!
//! [`ContextError`] wraps a typed error and collects a breadcrumb trail of
//! what was being attempted as the failure travels outward. The underlying
//! error stays typed and recoverable; the trail is purely for diagnostics.
//!
//! # Examples
//!
//! ```
//! use confluence::ContextError;
//!
//! let err = ContextError::new("connection refused")
//!     .context("querying user table")
//!     .context("loading profile");
//!
//! assert_eq!(err.inner(), &"connection refused");
//! assert_eq!(err.trail().len(), 2);
//! ```
//!
//! ## With effects
//!
//! ```
//! use confluence::{Effect, EffectContext};
//!
//! # tokio_test::block_on(async {
//! let effect = Effect::<i32, _>::fail("database error")
//!     .context("querying user table")
//!     .context("loading profile");
//!
//! let err = effect.run().await.unwrap_err();
//! assert_eq!(err.inner(), &"database error");
//! assert_eq!(err.trail(), &["querying user table", "loading profile"]);
//! # });
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::Effect;

/// An error wrapper that accumulates a diagnostic trail.
///
/// Messages are recorded innermost first, mirroring how the failure
/// propagated outward.
///
/// # Examples
///
/// ```
/// use confluence::ContextError;
///
/// let err = ContextError::new("timed out")
///     .context("fetching inventory")
///     .context("assembling report");
///
/// println!("{}", err);
/// // timed out
/// //   while fetching inventory
/// //   while assembling report
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextError<E> {
    error: E,
    trail: Vec<String>,
}

impl<E> ContextError<E> {
    /// Wrap an error with an empty trail.
    pub fn new(error: E) -> Self {
        ContextError {
            error,
            trail: Vec::new(),
        }
    }

    /// Append a breadcrumb to the trail.
    pub fn context(mut self, msg: impl Into<String>) -> Self {
        self.trail.push(msg.into());
        self
    }

    /// The wrapped error.
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Unwrap, discarding the trail.
    pub fn into_inner(self) -> E {
        self.error
    }

    /// Breadcrumbs in the order they were added (innermost first).
    pub fn trail(&self) -> &[String] {
        &self.trail
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        for msg in &self.trail {
            write!(f, "\n  while {}", msg)?;
        }
        Ok(())
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

/// Adds [`context`](EffectContext::context) to effects with a plain error
/// type.
///
/// The first call wraps the error in a [`ContextError`]; further calls go
/// through the inherent method on `Effect<T, ContextError<E>>` and extend the
/// existing trail instead of nesting wrappers.
pub trait EffectContext<T, E> {
    /// Wrap the effect's failure in a [`ContextError`] carrying `msg`.
    fn context(self, msg: impl Into<String>) -> Effect<T, ContextError<E>>;
}

impl<T, E> EffectContext<T, E> for Effect<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn context(self, msg: impl Into<String>) -> Effect<T, ContextError<E>> {
        let msg = msg.into();
        self.map_err(move |error| ContextError::new(error).context(msg))
    }
}

impl<T, E> Effect<T, ContextError<E>>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Extend the error trail with another breadcrumb.
    pub fn context(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.map_err(move |error| error.context(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_empty_trail() {
        let err = ContextError::new("base");
        assert_eq!(err.inner(), &"base");
        assert!(err.trail().is_empty());
    }

    #[test]
    fn test_trail_order_is_innermost_first() {
        let err = ContextError::new("base")
            .context("inner step")
            .context("outer step");
        assert_eq!(err.trail(), &["inner step", "outer step"]);
    }

    #[test]
    fn test_display_format() {
        let err = ContextError::new("file not found")
            .context("reading config")
            .context("starting up");

        let output = format!("{}", err);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "file not found");
        assert_eq!(lines[1], "  while reading config");
        assert_eq!(lines[2], "  while starting up");
    }

    #[test]
    fn test_into_inner_discards_trail() {
        let err = ContextError::new(42).context("step");
        assert_eq!(err.into_inner(), 42);
    }

    #[test]
    fn test_source_points_at_wrapped_error() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ContextError::new(io).context("reading config");
        assert!(err.source().is_some());
    }

    #[tokio::test]
    async fn test_effect_context_wraps_then_extends() {
        let effect = Effect::<i32, _>::fail("boom")
            .context("step one")
            .context("step two");

        let err = effect.run().await.unwrap_err();
        assert_eq!(err.inner(), &"boom");
        assert_eq!(err.trail(), &["step one", "step two"]);
    }

    #[tokio::test]
    async fn test_effect_context_untouched_on_success() {
        let effect = Effect::<_, String>::pure(1).context("irrelevant");
        assert_eq!(effect.run().await, Ok(1));
    }
}
