//! A value, the absence of a value, or a captured failure, in one container.
//!
//! [`Maybe<T, E>`](Maybe) is a three-state alternative to null checks and
//! error-driven control flow. It is always exactly one of `Present(T)`,
//! `Absent` or `Failure(E)`, and its combinators compose without the caller
//! ever inspecting the state.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `maybe_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use maybe_rail::Maybe;
//!
//! let value = Maybe::<i32, &str>::of(1)
//!     .map(|x| Ok(x + 1))
//!     .flat_map(|x| Ok(Maybe::of(x * 10)))
//!     .unwrap_or(-1);
//!
//! assert_eq!(value, 20);
//! ```
//!
//! ## Failure Capture and Recovery
//!
//! ```
//! use maybe_rail::Maybe;
//!
//! let recovered = Maybe::<i32, &str>::of(1)
//!     .map(|_| Err::<i32, _>("lookup failed"))
//!     .peek(|_| unreachable!("no value to look at"))
//!     .on_error(|_| 99);
//!
//! assert_eq!(recovered, Ok(99));
//! ```
//!
//! ## Value-Only Equality
//!
//! ```
//! use maybe_rail::Maybe;
//!
//! // Anything without a value compares as "nothing".
//! assert_eq!(Maybe::<i32, &str>::empty(), Maybe::failure("boom"));
//! assert_eq!(Maybe::<i32, &str>::failure("a"), Maybe::failure("b"));
//! assert_ne!(Maybe::<i32, &str>::of(1), Maybe::empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Maybe, Option and Result
pub mod convert;
/// Early-return macro for Maybe-returning functions
pub mod macros;
/// The Maybe container and its combinators
pub mod maybe;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Fallible transforms and lifting traits
pub mod traits;
/// MaybeError and supporting aliases
pub mod types;

/// Tracing taps for Maybe chains (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use maybe::Maybe;
pub use traits::*;
pub use types::{BoxError, DynMaybe, MaybeError};
