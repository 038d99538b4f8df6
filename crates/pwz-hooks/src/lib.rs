//! Typed filter chains for PWZ extension points.
//!
//! WordPress exposes extensibility through globally named filter hooks:
//! any code may call `add_filter("name", callback)` and the callbacks run,
//! in registration order, each receiving the previous callback's return
//! value. This crate keeps the chain-of-responsibility semantics but drops
//! the global registry: a [`FilterChain`] is an ordinary owned value that
//! the page composer receives explicitly.
//!
//! A chain is parameterized over the filtered value `T` and a read-only
//! context `Ctx` passed alongside it (hooks that carry extra arguments in
//! WordPress, such as the active tab slug, put them in the context).
//!
//! # Example
//!
//! ```
//! use pwz_hooks::FilterChain;
//!
//! let mut chain: FilterChain<Vec<u32>> = FilterChain::new();
//! chain.add(|mut v, _| {
//!     v.push(2);
//!     v
//! });
//! chain.add(|v, _| v.into_iter().filter(|n| n % 2 == 0).collect());
//!
//! assert_eq!(chain.apply(vec![1, 2], &()), vec![2, 2]);
//! ```

type Handler<T, Ctx> = Box<dyn Fn(T, &Ctx) -> T + Send + Sync>;

/// An ordered list of handlers that each transform a value of type `T`.
///
/// Handlers run synchronously in registration order. A handler that panics
/// is not caught; the panic propagates to the caller, which owns top-level
/// error presentation.
pub struct FilterChain<T, Ctx = ()> {
    handlers: Vec<Handler<T, Ctx>>,
}

impl<T, Ctx> FilterChain<T, Ctx> {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler to the end of the chain.
    pub fn add(&mut self, handler: impl Fn(T, &Ctx) -> T + Send + Sync + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Run the chain over `value`, threading each handler's return value
    /// into the next. An empty chain returns `value` unchanged.
    pub fn apply(&self, value: T, ctx: &Ctx) -> T {
        self.handlers
            .iter()
            .fold(value, |acc, handler| handler(acc, ctx))
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the chain has no handlers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T, Ctx> Default for FilterChain<T, Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Ctx> std::fmt::Debug for FilterChain<T, Ctx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Format a WordPress-style hook identifier: `{prefix}_{suffix}`.
///
/// Used for logging and for host-facing documentation of extension points;
/// dispatch itself is typed and never goes through this name.
#[must_use]
pub fn hook_name(prefix: &str, suffix: &str) -> String {
    format!("{prefix}_{suffix}")
}
