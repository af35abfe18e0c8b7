//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use maybe_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`present!`]
//! - **Types**: [`Maybe`], [`MaybeError`], [`DynMaybe`]
//! - **Traits**: [`IntoMaybe`], [`Transform`]
//!
//! # Examples
//!
//! ```
//! use maybe_rail::prelude::*;
//!
//! fn port(raw: Option<&str>) -> Maybe<u16, String> {
//!     let raw = present!(raw);
//!     raw.parse::<u16>().map_err(|e| e.to_string()).into_maybe()
//! }
//!
//! assert_eq!(port(Some("8080")), Maybe::of(8080));
//! assert!(port(Some("http")).is_error());
//! assert!(port(None).is_absent());
//! ```

// Macros
pub use crate::present;

// Core types
pub use crate::maybe::Maybe;
pub use crate::types::{DynMaybe, MaybeError};

// Traits
pub use crate::traits::{IntoMaybe, Transform};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::MaybeTraceExt;
