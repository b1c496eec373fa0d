//! Reader type for environment-dependent computations
//!
//! A [`Reader`] is a pure function from a shared environment to a value.
//! Pipelines built from readers never mention the environment in their
//! business logic; every stage receives the same `Env` when the pipeline is
//! finally [run](Reader::run). The environment is borrowed per invocation and
//! never stored, so one pipeline definition can be run against any number of
//! environments (production config, test doubles, per-request contexts).
//!
//! # Examples
//!
//! ```
//! use confluence::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     threshold: i32,
//! }
//!
//! let above = Reader::asks(|config: &Config| config.threshold)
//!     .and_then(|threshold| Reader::new(move |config: &Config| config.threshold > 0 && threshold > 0));
//!
//! assert!(above.run(&Config { threshold: 10 }));
//! assert!(!above.run(&Config { threshold: -1 }));
//! ```

use std::sync::Arc;

/// A pure, re-invocable computation that reads from a shared environment.
///
/// `Reader<Env, T>` wraps a function `&Env -> T`. Composition with
/// [`map`](Reader::map) and [`and_then`](Reader::and_then) threads the same
/// environment through every stage; the environment is supplied exactly once,
/// at the outermost [`run`](Reader::run).
///
/// Readers are cheap to clone (the underlying function is shared).
pub struct Reader<Env, T> {
    run_fn: Arc<dyn Fn(&Env) -> T + Send + Sync>,
}

impl<Env, T> Clone for Reader<Env, T> {
    fn clone(&self) -> Self {
        Reader {
            run_fn: Arc::clone(&self.run_fn),
        }
    }
}

impl<Env, T> std::fmt::Debug for Reader<Env, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("run_fn", &"<environment function>")
            .finish()
    }
}

impl<Env: 'static, T: 'static> Reader<Env, T> {
    /// Wrap a function from the environment.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Env) -> T + Send + Sync + 'static,
    {
        Reader { run_fn: Arc::new(f) }
    }

    /// A reader that ignores the environment and yields `value`.
    ///
    /// The value is cloned per invocation, keeping the reader re-invocable.
    pub fn pure(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Reader::new(move |_| value.clone())
    }

    /// Project a value out of the environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Reader;
    ///
    /// struct Env { name: String }
    ///
    /// let name = Reader::asks(|env: &Env| env.name.clone());
    /// assert_eq!(name.run(&Env { name: "prod".into() }), "prod");
    /// ```
    pub fn asks<F>(f: F) -> Self
    where
        F: Fn(&Env) -> T + Send + Sync + 'static,
    {
        Reader::new(f)
    }

    /// Transform the produced value.
    pub fn map<U, F>(self, f: F) -> Reader<Env, U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: 'static,
    {
        Reader::new(move |env| f((*self.run_fn)(env)))
    }

    /// Chain a dependent reader.
    ///
    /// The produced reader receives the receiver's value and runs against the
    /// same environment - the environment is threaded, never forked.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Reader;
    ///
    /// struct Env { base: i32 }
    ///
    /// let total = Reader::asks(|env: &Env| env.base)
    ///     .and_then(|base| Reader::new(move |env: &Env| base + env.base));
    ///
    /// assert_eq!(total.run(&Env { base: 21 }), 42);
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Reader<Env, U>
    where
        F: Fn(T) -> Reader<Env, U> + Send + Sync + 'static,
        U: 'static,
    {
        Reader::new(move |env| {
            let value = (*self.run_fn)(env);
            let next = f(value);
            (*next.run_fn)(env)
        })
    }

    /// Apply a function-valued reader to an argument reader.
    ///
    /// Both run against the same environment.
    pub fn ap<A, B>(self, arg: Reader<Env, A>) -> Reader<Env, B>
    where
        T: FnOnce(A) -> B,
        A: 'static,
        B: 'static,
    {
        Reader::new(move |env| {
            let func = (*self.run_fn)(env);
            let value = (*arg.run_fn)(env);
            func(value)
        })
    }

    /// Pair with another reader over the same environment.
    pub fn zip<U>(self, other: Reader<Env, U>) -> Reader<Env, (T, U)>
    where
        U: 'static,
    {
        Reader::new(move |env| ((*self.run_fn)(env), (*other.run_fn)(env)))
    }

    /// Adapt a reader to run under a larger (or differently shaped)
    /// environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Reader;
    ///
    /// struct App { db_url: String }
    ///
    /// let url = Reader::asks(|url: &String| url.clone());
    /// let from_app = url.local(|app: &App| app.db_url.clone());
    /// assert_eq!(from_app.run(&App { db_url: "db".into() }), "db");
    /// ```
    pub fn local<Outer, F>(self, f: F) -> Reader<Outer, T>
    where
        F: Fn(&Outer) -> Env + Send + Sync + 'static,
        Outer: 'static,
    {
        Reader::new(move |outer| {
            let env = f(outer);
            (*self.run_fn)(&env)
        })
    }

    /// Run against an environment, borrowed for the duration of the call.
    pub fn run(&self, env: &Env) -> T {
        (*self.run_fn)(env)
    }
}

impl<Env: Clone + 'static> Reader<Env, Env> {
    /// A reader that yields the whole environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Reader;
    ///
    /// let whole = Reader::<i32, i32>::ask();
    /// assert_eq!(whole.run(&7), 7);
    /// ```
    pub fn ask() -> Self {
        Reader::new(|env: &Env| env.clone())
    }
}
