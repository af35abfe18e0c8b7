//! Equality, hashing and formatting for [`Maybe`].
//!
//! Equality only looks at the value. Anything without a value compares as
//! "nothing", so `Absent` equals `Failure(_)` and two failures are equal no
//! matter which errors they hold. Hashing follows the same rule.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::maybe::core::Maybe;

impl<T: PartialEq, E> PartialEq for Maybe<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => a == b,
            (Maybe::Present(_), _) | (_, Maybe::Present(_)) => false,
            _ => true,
        }
    }
}

impl<T: Eq, E> Eq for Maybe<T, E> {}

impl<T: Hash, E> Hash for Maybe<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Maybe::Present(value) => value.hash(state),
            _ => 0u8.hash(state),
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Maybe<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(value) => write!(f, "Maybe[{value:?}]"),
            _ => f.write_str("Maybe.empty"),
        }
    }
}

impl<T: fmt::Display, E> fmt::Display for Maybe<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(value) => write!(f, "Maybe[{value}]"),
            _ => f.write_str("Maybe.empty"),
        }
    }
}

impl<T, E> Default for Maybe<T, E> {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T, E> From<Option<T>> for Maybe<T, E> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T, E> From<Result<T, E>> for Maybe<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Present(value),
            Err(error) => Self::Failure(error),
        }
    }
}
