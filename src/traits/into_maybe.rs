//! Extension trait for lifting `Option` and `Result` into [`Maybe`].
//!
//! # Examples
//!
//! ```
//! use maybe_rail::traits::IntoMaybe;
//! use maybe_rail::Maybe;
//!
//! let from_result: Maybe<u8, String> = "7".parse::<u8>().map_err(|e| e.to_string()).into_maybe();
//! assert_eq!(from_result, Maybe::of(7));
//!
//! let from_option: Maybe<u8, String> = None.into_maybe();
//! assert!(from_option.is_absent());
//! ```

use crate::maybe::Maybe;

/// Conversion into a [`Maybe`] at the end of a method chain.
///
/// - `Option<T>`: `Some` becomes `Present`, `None` becomes `Absent`
/// - `Result<T, E>`: `Ok` becomes `Present`, `Err` becomes `Failure`
/// - `Maybe<T, E>`: returned unchanged
pub trait IntoMaybe<T, E> {
    /// Converts `self` into a `Maybe`.
    fn into_maybe(self) -> Maybe<T, E>;
}

impl<T, E> IntoMaybe<T, E> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T, E> {
        Maybe::of_nullable(self)
    }
}

impl<T, E> IntoMaybe<T, E> for Result<T, E> {
    #[inline]
    fn into_maybe(self) -> Maybe<T, E> {
        Maybe::from(self)
    }
}

impl<T, E> IntoMaybe<T, E> for Maybe<T, E> {
    #[inline]
    fn into_maybe(self) -> Maybe<T, E> {
        self
    }
}
