//! Supporting types for [`Maybe`](crate::Maybe).
//!
//! # Examples
//!
//! ```
//! use maybe_rail::types::{DynMaybe, MaybeError};
//!
//! let step: DynMaybe<i32> = DynMaybe::of(1)
//!     .flat_map_nullable(|_| Ok(None::<DynMaybe<i32>>));
//!
//! let err = step.get_error().unwrap();
//! assert_eq!(err.to_string(), MaybeError::NullChainStep.to_string());
//! ```
use crate::maybe::Maybe;

pub mod alloc_type;
pub mod maybe_error;

pub use maybe_error::*;

/// Type-erased error used by [`DynMaybe`].
///
/// Any `core::error::Error + Send + Sync` converts into it, including
/// [`MaybeError`], which is what lets [`Maybe::flat_map_nullable`] report a
/// broken chain step.
pub type BoxError = alloc_type::Box<dyn core::error::Error + Send + Sync + 'static>;

/// `Maybe` whose failure side accepts any error.
///
/// # Type Parameters
///
/// * `T` - The value type
pub type DynMaybe<T> = Maybe<T, BoxError>;
