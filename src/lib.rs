//! # Confluence
//!
//! > *A confluence is where independent streams meet.*
//!
//! A Rust library for composing deferred computations with explicit
//! sequential and parallel structure.
//!
//! ## Philosophy
//!
//! **Confluence** keeps three things explicit that ad-hoc async code leaves
//! implicit:
//!
//! - **Presence and failure are values.** [`Maybe`] and [`Outcome`] make
//!   "might be missing" and "might fail" part of a function's type, with
//!   combinators that short-circuit instead of branching by hand.
//! - **Description is not execution.** An [`Effect`] describes an async
//!   computation; nothing runs until [`Effect::run`] is awaited, so pipelines
//!   can be built, passed around and composed freely.
//! - **Dependency shape is visible.** [`Effect::and_then`] declares "B needs
//!   A's value"; [`Effect::zip`] and the joins in [`par`] declare "A and B
//!   are independent, run them together". Reading the pipeline tells you the
//!   execution plan.
//!
//! [`Reader`] keeps shared configuration out of business logic, and
//! [`stack`] combines readers with the other layers without manual
//! unwrapping.
//!
//! ## Quick Example
//!
//! ```rust
//! use confluence::{par, Effect};
//!
//! # tokio_test::block_on(async {
//! // Independent fetches run together...
//! let profile = Effect::<_, String>::from_async(|| async { Ok("profile") });
//! let orders = Effect::<_, String>::from_async(|| async { Ok(vec![1, 2, 3]) });
//!
//! // ...then a dependent step consumes both.
//! let page = par::join2(profile, orders)
//!     .and_then(|(profile, orders)| {
//!         Effect::pure(format!("{}: {} orders", profile, orders.len()))
//!     });
//!
//! assert_eq!(page.run().await, Ok("profile: 3 orders".to_string()));
//! # });
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod context;
pub mod effect;
pub mod maybe;
pub mod outcome;
pub mod par;
pub mod reader;
pub mod stack;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod trace;

// Re-exports
pub use context::{ContextError, EffectContext};
pub use effect::{BoxFuture, Effect};
pub use maybe::Maybe;
pub use outcome::{AllOutcomes, Outcome};
pub use reader::Reader;
pub use stack::{Layer, ReaderEffect, ReaderMaybe, ReaderOutcome, ReaderT};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{ContextError, EffectContext};
    pub use crate::effect::Effect;
    pub use crate::maybe::Maybe;
    pub use crate::outcome::Outcome;
    pub use crate::par;
    pub use crate::reader::Reader;
    pub use crate::stack::{ReaderEffect, ReaderMaybe, ReaderOutcome, ReaderT};
    #[cfg(feature = "tracing")]
    pub use crate::trace::EffectTracingExt;
}
