//! Traits at the edges of [`Maybe`](crate::Maybe).
//!
//! - [`Transform`]: a single-input function that may fail, the failure
//!   boundary behind `map`, `flat_map` and `fold`
//! - [`IntoMaybe`]: lifting `Option` and `Result` into a `Maybe`
//!
//! # Examples
//!
//! ```
//! use maybe_rail::traits::{IntoMaybe, Transform};
//! use maybe_rail::Maybe;
//!
//! let double = |x: i32| Ok::<_, &str>(x * 2);
//! assert_eq!(double.apply(4), Ok(8));
//!
//! let lifted: Maybe<i32, &str> = Some(4).into_maybe();
//! assert_eq!(lifted.apply(double), Maybe::of(8));
//! ```

pub mod into_maybe;
pub mod transform;

pub use into_maybe::IntoMaybe;
pub use transform::Transform;
