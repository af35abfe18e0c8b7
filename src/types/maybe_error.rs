//! Errors raised by [`Maybe`](crate::Maybe) itself.
//!
//! These never describe a caller's domain failure. Domain failures are captured
//! in [`Maybe::Failure`](crate::Maybe::Failure) and stay there until asked for.
//! `MaybeError` only reports contract problems: asking for a value or an error
//! the container does not hold, or a chain step that produced no container.

use core::fmt;

/// Access-time and contract-violation errors.
///
/// # Examples
///
/// ```
/// use maybe_rail::{Maybe, MaybeError};
///
/// let absent: Maybe<i32, &str> = Maybe::empty();
/// assert_eq!(absent.get(), Err(MaybeError::NoValuePresent));
/// assert_eq!(MaybeError::NoValuePresent.to_string(), "No value present");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaybeError {
    /// A value was requested from an `Absent` or `Failure` container.
    NoValuePresent,
    /// An error was requested from a `Present` or `Absent` container.
    NoErrorPresent,
    /// A chaining step returned no container at all.
    NullChainStep,
}

impl MaybeError {
    /// Returns the fixed message for this error.
    #[must_use]
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoValuePresent => "No value present",
            Self::NoErrorPresent => "No error present",
            Self::NullChainStep => "chain step produced no container",
        }
    }
}

impl fmt::Display for MaybeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for MaybeError {}
