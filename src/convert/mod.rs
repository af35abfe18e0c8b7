//! Conversion helpers between `Maybe`, `Option` and `Result`.
//!
//! These adapters let a `Maybe` chain start from, or hand back to, code that
//! speaks the standard types.
//!
//! # Examples
//!
//! ```
//! use maybe_rail::convert::*;
//! use maybe_rail::Maybe;
//!
//! let lookup: Result<Option<i32>, &str> = Ok(None);
//! let maybe = nullable_result_to_maybe(lookup);
//! assert!(maybe.is_absent());
//!
//! assert_eq!(maybe_to_nullable_result(maybe), Ok(None));
//! ```

use crate::maybe::Maybe;

/// Converts an `Option` into a `Maybe`.
///
/// # Examples
///
/// ```
/// use maybe_rail::convert::option_to_maybe;
///
/// assert!(option_to_maybe::<i32, &str>(Some(1)).is_present());
/// assert!(option_to_maybe::<i32, &str>(None).is_absent());
/// ```
#[inline]
pub fn option_to_maybe<T, E>(option: Option<T>) -> Maybe<T, E> {
    Maybe::of_nullable(option)
}

/// Converts a `Result` into a `Maybe`.
///
/// # Returns
///
/// * `Maybe::Present(value)` if result is `Ok`
/// * `Maybe::Failure(error)` if result is `Err`
#[inline]
pub fn result_to_maybe<T, E>(result: Result<T, E>) -> Maybe<T, E> {
    Maybe::from(result)
}

/// Converts the outcome of a lookup that may fail or find nothing.
///
/// # Returns
///
/// * `Maybe::Present(value)` for `Ok(Some(value))`
/// * `Maybe::Absent` for `Ok(None)`
/// * `Maybe::Failure(error)` for `Err(error)`
#[inline]
pub fn nullable_result_to_maybe<T, E>(result: Result<Option<T>, E>) -> Maybe<T, E> {
    match result {
        Ok(option) => Maybe::of_nullable(option),
        Err(error) => Maybe::Failure(error),
    }
}

/// Inverse of [`nullable_result_to_maybe`].
///
/// # Examples
///
/// ```
/// use maybe_rail::convert::maybe_to_nullable_result;
/// use maybe_rail::Maybe;
///
/// assert_eq!(maybe_to_nullable_result(Maybe::<i32, &str>::of(1)), Ok(Some(1)));
/// assert_eq!(maybe_to_nullable_result(Maybe::<i32, &str>::failure("x")), Err("x"));
/// ```
#[inline]
pub fn maybe_to_nullable_result<T, E>(maybe: Maybe<T, E>) -> Result<Option<T>, E> {
    match maybe {
        Maybe::Present(value) => Ok(Some(value)),
        Maybe::Absent => Ok(None),
        Maybe::Failure(error) => Err(error),
    }
}

/// Converts a `Maybe` into an `Option`, discarding any captured error.
#[inline]
pub fn maybe_to_option<T, E>(maybe: Maybe<T, E>) -> Option<T> {
    maybe.ok()
}

/// Converts a `Maybe` into a `Result`, producing an error for `Absent`.
///
/// `on_absent` is only called for `Absent`.
///
/// # Examples
///
/// ```
/// use maybe_rail::convert::maybe_to_result;
/// use maybe_rail::Maybe;
///
/// let absent = Maybe::<i32, String>::empty();
/// assert_eq!(maybe_to_result(absent, || "missing".to_string()), Err("missing".to_string()));
///
/// let failed = Maybe::<i32, String>::failure("boom".to_string());
/// assert_eq!(maybe_to_result(failed, || "missing".to_string()), Err("boom".to_string()));
/// ```
#[inline]
pub fn maybe_to_result<T, E, F>(maybe: Maybe<T, E>, on_absent: F) -> Result<T, E>
where
    F: FnOnce() -> E,
{
    match maybe {
        Maybe::Present(value) => Ok(value),
        Maybe::Absent => Err(on_absent()),
        Maybe::Failure(error) => Err(error),
    }
}
