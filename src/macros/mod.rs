//! Macros for working with [`Maybe`](crate::Maybe) inside functions.
//!
//! - [`macro@crate::present`] - Unwraps a present value or returns the
//!   `Absent`/`Failure` state from the enclosing function, the way `?` does
//!   for `Result`.
//!
//! # Examples
//!
//! ```
//! use maybe_rail::{present, Maybe};
//!
//! fn total(a: Maybe<i32, &'static str>, b: Maybe<i32, &'static str>) -> Maybe<i32, &'static str> {
//!     let a = present!(a);
//!     let b = present!(b);
//!     Maybe::of(a + b)
//! }
//!
//! assert_eq!(total(Maybe::of(1), Maybe::of(2)), Maybe::of(3));
//! assert!(total(Maybe::of(1), Maybe::empty()).is_absent());
//! assert!(total(Maybe::failure("io"), Maybe::of(2)).is_error());
//! ```

/// Extracts the value of a [`Maybe`](crate::Maybe) or returns early.
///
/// The enclosing function must return `Maybe<U, E>` with the same error type.
/// `Absent` and `Failure` are returned as they are, retyped to `U`. The
/// expression may be anything implementing
/// [`IntoMaybe`](crate::traits::IntoMaybe), so `Option` and `Result` values
/// work too.
///
/// # Examples
///
/// ```
/// use maybe_rail::{present, Maybe};
///
/// fn first_char(input: Option<&str>) -> Maybe<char, String> {
///     let text = present!(input);
///     Maybe::of_nullable(text.chars().next())
/// }
///
/// assert_eq!(first_char(Some("rail")), Maybe::of('r'));
/// assert!(first_char(None).is_absent());
/// assert!(first_char(Some("")).is_absent());
/// ```
#[macro_export]
macro_rules! present {
    ($expr:expr) => {
        match $crate::traits::IntoMaybe::into_maybe($expr).into_present() {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(rest) => return rest,
        }
    };
}
