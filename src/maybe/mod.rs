//! The [`Maybe`] container and its combinators.
//!
//! A `Maybe<T, E>` is always in exactly one of three states:
//!
//! - `Present(T)` - a value
//! - `Absent` - no value and no error
//! - `Failure(E)` - a captured error
//!
//! Combinators only run caller code on `Present`. The other two states move
//! through a chain untouched until a fallback ([`Maybe::or`],
//! [`Maybe::unwrap_or`]) or a recovery ([`Maybe::on_error`]) deals with them.
//!
//! # Key Components
//!
//! - [`Maybe`] - The container
//! - Value-only equality and hashing, `Debug`/`Display`, `Default` and `From`
//!   conversions
//! - `FromIterator` for collecting many containers into one
//!
//! # Examples
//!
//! ```
//! use maybe_rail::maybe::Maybe;
//!
//! let recovered = Maybe::<i32, &str>::of(1)
//!     .map(|_| Err("lookup failed"))
//!     .on_error(|_| 99);
//!
//! assert_eq!(recovered, Ok(99));
//! ```
pub mod cmp;
pub mod collect;
pub mod core;

pub use self::core::*;
