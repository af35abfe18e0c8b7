//! Tracing integration for maybe-rail.
//!
//! This module provides taps that report the state of a [`Maybe`] chain to
//! the `tracing` ecosystem without changing it. They are built on
//! [`Maybe::peek`] and [`Maybe::peek_error`], so the container passes through
//! untouched.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! maybe-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Display;

use tracing::Span;

use crate::maybe::Maybe;

/// Extension trait that emits tracing events for a [`Maybe`].
///
/// # Example
///
/// ```rust,ignore
/// use maybe_rail::tracing_ext::MaybeTraceExt;
/// use tracing::info_span;
///
/// let span = info_span!("load_user", user_id = 42);
/// let user = Maybe::of(42)
///     .in_span(&span, |m| m.flat_map(find_user))
///     .trace_failure("load_user")
///     .unwrap_or_default();
/// ```
pub trait MaybeTraceExt<T, E>: Sized {
    /// Emits a `WARN` event carrying the error if the container is a `Failure`.
    fn trace_failure(self, operation: &str) -> Self;

    /// Emits a `DEBUG` event naming the current state.
    fn trace_state(self, operation: &str) -> Self;

    /// Runs `step` with `span` entered.
    fn in_span<U, F>(self, span: &Span, step: F) -> Maybe<U, E>
    where
        F: FnOnce(Self) -> Maybe<U, E>;
}

impl<T, E: Display> MaybeTraceExt<T, E> for Maybe<T, E> {
    fn trace_failure(self, operation: &str) -> Self {
        self.peek_error(|error| {
            tracing::warn!(operation, error = %error, "maybe chain captured a failure");
        })
    }

    fn trace_state(self, operation: &str) -> Self {
        tracing::debug!(operation, state = state_name(&self), "maybe chain state");
        self
    }

    fn in_span<U, F>(self, span: &Span, step: F) -> Maybe<U, E>
    where
        F: FnOnce(Self) -> Maybe<U, E>,
    {
        let _entered = span.enter();
        step(self)
    }
}

/// Returns the name of the active state, as used in tracing fields.
pub fn state_name<T, E>(maybe: &Maybe<T, E>) -> &'static str {
    match maybe {
        Maybe::Present(_) => "present",
        Maybe::Absent => "absent",
        Maybe::Failure(_) => "failure",
    }
}
